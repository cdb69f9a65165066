//! Text height estimates
//!
//! The layout runs before any font is loaded, so text is measured with
//! average glyph advances and greedy word wrapping. Estimates lean wide so
//! real text fits inside the boxes computed from them.

use brandkit_ast::{FontFamily, StyledRun};

/// Average-advance text measurer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMeasure {
    /// Average advance of a regular glyph, in ems
    pub regular: f64,
    /// Average advance of a bold glyph, in ems
    pub bold: f64,
    /// Advance of a monospace glyph, in ems
    pub mono: f64,
}

impl Default for TextMeasure {
    fn default() -> Self {
        Self {
            regular: 0.52,
            bold: 0.56,
            mono: 0.62,
        }
    }
}

struct Word {
    width: f64,
    space: f64,
}

impl TextMeasure {
    fn advance(&self, run: &StyledRun) -> f64 {
        let em = match (run.family, run.bold) {
            (FontFamily::Mono, _) => self.mono,
            (_, true) => self.bold,
            (_, false) => self.regular,
        };
        em * run.size
    }

    /// Width of a single line of text
    pub fn line_width(&self, runs: &[StyledRun]) -> f64 {
        runs.iter()
            .map(|r| r.text.chars().count() as f64 * self.advance(r))
            .sum()
    }

    /// Number of lines the runs wrap to inside `width`
    pub fn line_count(&self, runs: &[StyledRun], width: i64) -> usize {
        let max = width.max(1) as f64;
        let mut lines: Vec<Vec<Word>> = vec![Vec::new()];

        for run in runs {
            let advance = self.advance(run);
            for (i, hard_line) in run.text.split('\n').enumerate() {
                if i > 0 {
                    lines.push(Vec::new());
                }
                for word in hard_line.split_whitespace() {
                    if let Some(line) = lines.last_mut() {
                        line.push(Word {
                            width: word.chars().count() as f64 * advance,
                            space: advance,
                        });
                    }
                }
            }
        }

        lines.iter().map(|words| wrap_count(words, max)).sum()
    }

    /// Height of the runs wrapped inside `width`
    pub fn height(&self, runs: &[StyledRun], width: i64, leading: f64) -> i64 {
        let size = runs.iter().map(|r| r.size).fold(0.0, f64::max);
        let lines = self.line_count(runs, width);
        (lines as f64 * size * leading).ceil() as i64
    }
}

fn wrap_count(words: &[Word], max: f64) -> usize {
    if words.is_empty() {
        return 1;
    }
    let mut count = 1;
    let mut current = 0.0;
    for word in words {
        if word.width > max {
            // overlong words get lines of their own
            if current > 0.0 {
                count += 1;
            }
            count += (word.width / max).ceil() as usize - 1;
            current = word.width % max;
            continue;
        }
        let needed = if current > 0.0 {
            current + word.space + word.width
        } else {
            word.width
        };
        if needed > max {
            count += 1;
            current = word.width;
        } else {
            current = needed;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandkit_ast::Rgb;

    fn run(text: &str, size: f64) -> StyledRun {
        StyledRun {
            text: text.to_string(),
            size,
            bold: false,
            italic: false,
            color: Rgb::BLACK,
            family: FontFamily::Sans,
        }
    }

    #[test]
    fn test_single_line() {
        let measure = TextMeasure::default();
        assert_eq!(measure.line_count(&[run("Brand Kit", 10.0)], 500), 1);
        assert_eq!(measure.height(&[run("Brand Kit", 10.0)], 500, 1.4), 14);
    }

    #[test]
    fn test_wraps_long_text() {
        let measure = TextMeasure::default();
        let text = "word ".repeat(40);
        // 40 words of 4 glyphs at 10pt: about 2.6pt per glyph
        let lines = measure.line_count(&[run(&text, 10.0)], 100);
        assert!(lines >= 8, "got {lines}");
    }

    #[test]
    fn test_hard_breaks() {
        let measure = TextMeasure::default();
        let runs = [run("Tailwind CSS via CDN\nwith custom\nbrand theme", 9.0)];
        assert_eq!(measure.line_count(&runs, 400), 3);
    }

    #[test]
    fn test_empty_text_is_one_line() {
        let measure = TextMeasure::default();
        assert_eq!(measure.line_count(&[run("", 10.0)], 100), 1);
        assert_eq!(measure.line_count(&[], 100), 1);
    }

    #[test]
    fn test_overlong_word() {
        let measure = TextMeasure::default();
        let url = "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700";
        let lines = measure.line_count(&[run(url, 10.0)], 100);
        assert!(lines >= 3);
    }

    #[test]
    fn test_mono_is_wider() {
        let measure = TextMeasure::default();
        let mut mono = run("#1A6EF5", 9.0);
        mono.family = FontFamily::Mono;
        assert!(measure.line_width(&[mono]) > measure.line_width(&[run("#1A6EF5", 9.0)]));
    }
}
