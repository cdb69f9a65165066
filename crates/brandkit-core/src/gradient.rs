//! Gradient approximation
//!
//! Neither output format gets a real gradient fill. A gradient is drawn as
//! one solid band per stop, left to right, with band widths proportional
//! to the stop fractions. The last band absorbs the rounding so the bands
//! always tile the target width exactly.

use brandkit_ast::{GradientSpec, GradientStop, Rect, RectElement};

use crate::error::LayoutError;

/// Allowed distance of the fraction sum from 1.0
pub const FRACTION_TOLERANCE: f64 = 1e-6;

/// Check stops without laying them out
pub fn validate(name: &str, stops: &[GradientStop]) -> Result<(), LayoutError> {
    if stops.is_empty() {
        return Err(LayoutError::invalid_gradient(name, "no stops"));
    }
    for (i, stop) in stops.iter().enumerate() {
        if !(stop.fraction > 0.0 && stop.fraction <= 1.0) {
            return Err(LayoutError::invalid_gradient(
                name,
                format!("stop {i} has fraction {} outside (0, 1]", stop.fraction),
            ));
        }
    }
    let sum: f64 = stops.iter().map(|s| s.fraction).sum();
    if (sum - 1.0).abs() > FRACTION_TOLERANCE {
        return Err(LayoutError::invalid_gradient(
            name,
            format!("fractions sum to {sum}, expected 1.0"),
        ));
    }
    Ok(())
}

/// Band widths for `stops` across `width` points
///
/// Every band but the last is `round(width * fraction)` with ties to even,
/// capped at the width still free; the last one takes what is left.
pub fn band_widths(
    name: &str,
    stops: &[GradientStop],
    width: i64,
) -> Result<Vec<i64>, LayoutError> {
    validate(name, stops)?;

    let mut widths = Vec::with_capacity(stops.len());
    let mut used = 0i64;
    for stop in &stops[..stops.len() - 1] {
        let w = ((width as f64 * stop.fraction).round_ties_even() as i64)
            .min(width - used)
            .max(0);
        widths.push(w);
        used += w;
    }
    widths.push(width - used);
    Ok(widths)
}

/// Solid bands approximating `gradient` inside `frame`
pub fn approximate(gradient: &GradientSpec, frame: Rect) -> Result<Vec<RectElement>, LayoutError> {
    let widths = band_widths(&gradient.name, &gradient.stops, frame.width)?;
    let mut x = frame.x;
    Ok(gradient
        .stops
        .iter()
        .zip(widths)
        .map(|(stop, w)| {
            let band = RectElement::filled(Rect::new(x, frame.y, w, frame.height), stop.color);
            x += w;
            band
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandkit_ast::Rgb;

    const BLUE: Rgb = Rgb::from_u32(0x1a6ef5);
    const BRIGHT: Rgb = Rgb::from_u32(0x338dff);
    const ORANGE: Rgb = Rgb::from_u32(0xf97316);
    const NAVY: Rgb = Rgb::from_u32(0x142857);

    fn spec(stops: Vec<(Rgb, f64)>) -> GradientSpec {
        GradientSpec::new(
            "test",
            stops
                .into_iter()
                .map(|(c, f)| GradientStop::new(c, f))
                .collect(),
        )
    }

    #[test]
    fn test_two_halves_tie_to_even() {
        let bands = approximate(
            &spec(vec![(BLUE, 0.5), (ORANGE, 0.5)]),
            Rect::new(80, 200, 581, 40),
        )
        .unwrap();
        let widths: Vec<i64> = bands.iter().map(|b| b.bounds.width).collect();
        let xs: Vec<i64> = bands.iter().map(|b| b.bounds.x).collect();
        assert_eq!(widths, vec![290, 291]);
        assert_eq!(xs, vec![80, 370]);
        assert_eq!(bands[0].fill, Some(BLUE));
        assert_eq!(bands[1].fill, Some(ORANGE));
    }

    #[test]
    fn test_rounding_never_overruns_narrow_width() {
        let stops: Vec<GradientStop> = [0.32, 0.32, 0.32, 0.04]
            .into_iter()
            .map(|f| GradientStop::new(BLUE, f))
            .collect();
        assert_eq!(band_widths("narrow", &stops, 2).unwrap(), vec![1, 1, 0, 0]);
        assert_eq!(
            band_widths("wide", &stops, 487).unwrap(),
            vec![156, 156, 156, 19]
        );
    }

    #[test]
    fn test_bands_tile_width() {
        let gradient = spec(vec![(NAVY, 0.33), (BLUE, 0.34), (BRIGHT, 0.33)]);
        for width in [1, 2, 3, 100, 487, 581, 844] {
            let bands = approximate(&gradient, Rect::new(10, 0, width, 30)).unwrap();
            let total: i64 = bands.iter().map(|b| b.bounds.width).sum();
            assert_eq!(total, width);
            assert!(bands.iter().all(|b| b.bounds.width >= 0));
            for pair in bands.windows(2) {
                assert_eq!(pair[0].bounds.right(), pair[1].bounds.x);
            }
            assert_eq!(bands.last().unwrap().bounds.right(), 10 + width);
        }
    }

    #[test]
    fn test_single_stop_fills_everything() {
        let bands = approximate(&spec(vec![(BLUE, 1.0)]), Rect::new(0, 0, 77, 5)).unwrap();
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].bounds.width, 77);
    }

    #[test]
    fn test_fractions_must_sum_to_one() {
        let err = band_widths("bad", &[GradientStop::new(BLUE, 0.5)], 100).unwrap_err();
        assert_eq!(err.code(), "LAYOUT003");

        let ok = band_widths(
            "close",
            &[
                GradientStop::new(BLUE, 0.5 + 5e-7),
                GradientStop::new(ORANGE, 0.5),
            ],
            100,
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_fraction_range() {
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            let err = band_widths(
                "range",
                &[GradientStop::new(BLUE, bad), GradientStop::new(ORANGE, 1.0)],
                100,
            )
            .unwrap_err();
            assert!(matches!(err, LayoutError::InvalidGradient { .. }));
        }
    }

    #[test]
    fn test_no_stops() {
        let err = approximate(&spec(Vec::new()), Rect::new(0, 0, 10, 10)).unwrap_err();
        assert!(err.to_string().contains("no stops"));
    }

    #[test]
    fn test_zero_width_target() {
        let bands = approximate(&spec(vec![(BLUE, 0.5), (ORANGE, 0.5)]), Rect::new(0, 0, 0, 10))
            .unwrap();
        assert!(bands.iter().all(|b| b.bounds.width == 0));
    }
}
