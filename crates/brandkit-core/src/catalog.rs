//! The brand kit content
//!
//! One [`Document`] feeds both the PDF and the deck. Identity strings come
//! from the configuration; everything else is the literal brand copy.

use brandkit_ast::{
    Alignment, Callout, CardSpec, CardStyle, ClosingSpec, ColorToken, ColumnSpec, ContentBlock,
    CoverSpec, Document, DocumentMeta, FrameSpec, GradientBlock, GradientSpec, GradientStop,
    GridSpec, ImageBlock, PaletteSpec, Paragraph, Rgb, SectionSpec, Subheading, TableSpec,
    TextRole, TextRun,
};
use chrono::NaiveDate;

use crate::asset::LOGO;
use crate::config::IdentityConfig;
use crate::error::Result;
use crate::template::tagline_runs;
use crate::theme::Theme;

/// Cover date label, e.g. `October 2026`
pub fn date_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Split a tagline after its first sentence, for two-color rendering
///
/// `"Trusted Partner. Swift Solutions."` becomes
/// `("Trusted Partner. ", "Swift Solutions.")`. A tagline with a single
/// sentence is returned whole as the lead.
pub fn split_tagline(tagline: &str) -> (String, String) {
    match tagline.find(". ") {
        Some(i) => {
            let (lead, accent) = tagline.split_at(i + 2);
            (lead.to_string(), accent.to_string())
        }
        None => (tagline.to_string(), String::new()),
    }
}

/// The complete brand kit
pub fn brand_kit(identity: &IdentityConfig, theme: &Theme, date: &str) -> Result<Document> {
    let company = identity.company.as_str();
    let (lead, accent) = split_tagline(&identity.tagline);

    Ok(Document {
        meta: DocumentMeta {
            title: format!("{company} Brand Kit"),
            subject: "Visual Identity & Brand Guidelines".to_string(),
            company: company.to_string(),
            version: identity.version.clone(),
            date: date.to_string(),
        },
        cover: CoverSpec {
            title: "Brand Kit".to_string(),
            subtitle: "Visual Identity & Brand Guidelines".to_string(),
            badge: format!("VERSION {}", identity.version),
            info: vec![
                ("Company".to_string(), company.to_string()),
                ("Date".to_string(), date.to_string()),
                ("Domain".to_string(), identity.domain.clone()),
                ("Industry".to_string(), identity.industry.clone()),
            ],
            tagline: identity.tagline.clone(),
            copyright: format!("{} | {}", identity.copyright, identity.domain),
            notes: Some(notes(
                &format!("Welcome to the {company} Brand Kit presentation."),
                "This guide covers our visual identity including logo, colors, typography, and UI components.",
                "Let's start with an overview of our brand.",
            )),
        },
        frame: FrameSpec {
            header_label: format!("{company} Brand Kit"),
            footer_left: format!("{company} — {}", identity.tagline),
            footer_right: identity.domain.clone(),
        },
        sections: vec![
            overview(identity, theme, &lead, &accent),
            logo(theme),
            palette()?,
            gradients(theme),
            typography(),
            buttons(),
            values(theme),
            contact(identity, theme),
            technical(theme),
            takeaways(theme),
        ],
        closing: Some(ClosingSpec {
            title: "Thank You".to_string(),
            contact: format!(
                "{}  •  {}  •  {}",
                identity.phone, identity.email, identity.domain
            ),
            tagline: (lead, accent),
            copyright: identity.copyright.clone(),
            notes: Some(format!(
                "[KEY POINT]: Thank the audience for their time.\n\
                 [DATA]: Provide contact details for follow-up questions.\n\
                 For brand kit updates or questions, reach out to {}.",
                identity.email
            )),
        }),
    })
}

fn notes(key_point: &str, data: &str, transition: &str) -> String {
    format!("[KEY POINT]: {key_point}\n[DATA]: {data}\n[TRANSITION]: {transition}")
}

fn small(text: &str) -> ContentBlock {
    ContentBlock::Paragraph(Paragraph::text(text).with_role(TextRole::Small))
}

fn caption(text: &str) -> ContentBlock {
    ContentBlock::Paragraph(
        Paragraph::from_runs(vec![TextRun::italic(text)]).with_role(TextRole::Caption),
    )
}

fn subheading(text: &str) -> ContentBlock {
    ContentBlock::Subheading(Subheading::new(text))
}

/// Compliance badge: check mark, bold badge, description on the next line
fn check(badge: &str, description: &str, theme: &Theme) -> Callout {
    Callout::new(
        vec![
            TextRun::bold("✓  ").colored(theme.emerald_dark),
            TextRun::bold(badge),
            TextRun::plain(format!("\n{description}")).colored(theme.text_secondary),
        ],
        theme.emerald_tint,
    )
    .with_border(theme.emerald_light)
}

/// Two-column label/value table with a bold first column
fn pairs(left: &str, right: &str, rows: &[(&str, &str)]) -> TableSpec {
    rows.iter().fold(
        TableSpec::new(vec![ColumnSpec::new(left, 1).bold(), ColumnSpec::new(right, 3)]),
        |table, (a, b)| table.row([*a, *b]),
    )
}

fn overview(identity: &IdentityConfig, theme: &Theme, lead: &str, accent: &str) -> SectionSpec {
    let company = identity.company.as_str();
    SectionSpec::new("Brand Overview")
        .with_intro(format!(
            "{company} is a modern financial services facilitator providing smart financial \
             solutions across loans, credit cards, and insurance. With 50+ banking partners and \
             10,000+ satisfied customers, we make financial decisions simple, transparent, and \
             accessible for every Indian."
        ))
        .block(ContentBlock::Callout(
            Callout::new(tagline_runs(lead, accent, theme.logo_gold), theme.tint)
                .with_border(theme.primary)
                .with_role(TextRole::Subheading)
                .aligned(Alignment::Center),
        ))
        .block(caption(
            "Primary brand tagline — used across all communications",
        ))
        .block(subheading("Key Metrics"))
        .block(ContentBlock::Grid(
            GridSpec::new(
                4,
                vec![
                    CardSpec::new("500+ Cr", "Loans Disbursed", theme.primary),
                    CardSpec::new("10,000+", "Happy Customers", theme.logo_gold),
                    CardSpec::new("50+", "Banking Partners", theme.emerald),
                    CardSpec::new("24/7", "Expert Support", theme.accent),
                ],
            )
            .with_style(CardStyle::Stat),
        ))
        .with_notes(notes(
            "CredSuvidha is a fintech facilitator providing loans, credit cards, and insurance.",
            "500+ Cr disbursed, 10K+ customers, 50+ banking partners, 24/7 support.",
            "Let's look at our visual identity starting with the logo.",
        ))
}

fn logo(theme: &Theme) -> SectionSpec {
    SectionSpec::new("Logo")
        .with_intro(
            "The CredSuvidha logo features interlocking C and S letterforms with an upward growth \
             arrow, symbolizing financial progress and trusted partnership. The navy blue \
             represents trust and stability, while the gold represents prosperity and value.",
        )
        .block(ContentBlock::Image(
            ImageBlock::new(LOGO, 252)
                .with_caption("Primary — Light Background")
                .on_backdrop(theme.white),
        ))
        .block(ContentBlock::Image(
            ImageBlock::new(LOGO, 252)
                .with_caption("On Brand Cream — #FAF6F1")
                .on_backdrop(theme.logo_cream),
        ))
        .block(subheading("Logo Elements"))
        .block(ContentBlock::Table(pairs(
            "Element",
            "Description",
            &[
                ("Symbol", "Interlocking \"C\" (navy blue) and \"S\" (gold) with upward growth arrow"),
                ("Wordmark", "\"CREDSUVIDHA.COM\" in navy blue uppercase"),
                ("Tagline", "\"TRUSTED PARTNER. SWIFT SOLUTIONS.\" in gold"),
                ("Min Size", "120px wide (digital) / 30mm (print)"),
                ("Clear Space", "Equal to the height of the \"C\" around all sides"),
            ],
        )))
        .block(subheading("Usage Guidelines"))
        .block(ContentBlock::Table(
            TableSpec::new(vec![ColumnSpec::new("Do ✓", 1), ColumnSpec::new("Don't ✗", 1)])
                .row([
                    "Use on white, cream, or very light backgrounds",
                    "Don't stretch or distort the logo",
                ])
                .row([
                    "Use inverted (white) version on dark backgrounds",
                    "Don't change the logo colors",
                ])
                .row([
                    "Maintain proportions when scaling",
                    "Don't place on busy or low-contrast backgrounds",
                ])
                .row([
                    "Keep minimum clear space around logo",
                    "Don't add effects like drop shadows or outlines",
                ])
                .with_header_fill(theme.navy_dark),
        ))
        .with_notes(notes(
            "The logo features interlocking C and S with a growth arrow.",
            "Navy blue = trust/stability, Gold = prosperity/value.",
            "Now let's examine our color palette in detail.",
        ))
}

fn tokens(entries: &[(&str, &str, &str)]) -> Result<Vec<ColorToken>> {
    entries
        .iter()
        .map(|(name, hex, usage)| Ok(ColorToken::parse(*name, hex, *usage)?))
        .collect()
}

fn swatches(title: &str, entries: &[(&str, &str, &str)]) -> Result<ContentBlock> {
    Ok(ContentBlock::Swatch(PaletteSpec::new(title, tokens(entries)?)))
}

fn palette() -> Result<SectionSpec> {
    Ok(SectionSpec::new("Color Palette")
        .with_intro(
            "Our color system is built around trust (navy blue), warmth (gold/amber), energy \
             (orange), and growth (emerald green).",
        )
        .block(swatches(
            "Primary — Brand Blue",
            &[
                ("950 Navy Dark", "#142857", "Dark backgrounds, footers"),
                ("900 Navy", "#193f8f", "Deep accents"),
                ("800 Deep Blue", "#1747b6", "Strong emphasis"),
                ("700 Blue", "#1458e1", "Links, interactive"),
                ("600 Primary ★", "#1a6ef5", "Primary CTA, buttons, icons"),
                ("500 Bright", "#338dff", "Hover states, secondary CTA"),
                ("400 Light", "#59b0ff", "Decorative elements"),
                ("300 Lighter", "#8ecdff", "Subtle highlights"),
                ("200 Pale", "#bce0ff", "Light borders"),
                ("100 Wash", "#d9edff", "Subtle backgrounds"),
                ("50 Tint", "#eef7ff", "Page tint, badges"),
            ],
        )?)
        .block(swatches(
            "Logo Colors (Extracted)",
            &[
                ("Logo Navy", "#1B3A5C", "C letterform, wordmark text"),
                ("Logo Gold", "#C5961E", "S letterform, tagline text"),
                ("Logo Background", "#FAF6F1", "Original logo background"),
            ],
        )?)
        .block(swatches(
            "Accent — Orange",
            &[
                ("700 Dark", "#c2410c", "Pressed state"),
                ("600 Medium", "#ea580c", "Hover state"),
                ("500 Primary ★", "#f97316", "Accent CTA, highlights"),
                ("400 Light", "#fb923c", "Soft accent"),
                ("300 Lighter", "#fdba74", "Decorative"),
                ("50 Tint", "#fff7ed", "Accent background"),
            ],
        )?)
        .block(swatches(
            "Success — Emerald Green",
            &[
                ("600 Dark", "#059669", "Success dark"),
                ("500 Primary", "#10b981", "Success indicators, positive values"),
                ("400 Light", "#34d399", "Ticker positive values"),
                ("50 Tint", "#ecfdf5", "Success background"),
            ],
        )?)
        .block(swatches(
            "Neutrals — Slate Grays",
            &[
                ("Slate 900", "#0f172a", "Strongest text"),
                ("Text Primary", "#1e293b", "Body text"),
                ("Slate 700", "#334155", "Strong secondary"),
                ("Text Secondary", "#64748b", "Secondary text, captions"),
                ("Text Muted", "#94a3b8", "Muted text, placeholders"),
                ("Border", "#e2e8f0", "Borders, dividers"),
                ("Background Alt", "#f8fafc", "Alt section backgrounds"),
                ("White", "#ffffff", "Page backgrounds, cards"),
            ],
        )?)
        .with_notes(notes(
            "Our color system has 4 families — brand blue, logo colors, accent orange, emerald.",
            "Primary brand color is #1A6EF5 (Brand 600). Logo uses #1B3A5C navy and #C5961E gold.",
            "Next, let's look at our gradient specifications.",
        )))
}

/// Evenly split stops, as the CSS gradients are drawn
fn even_gradient(name: &str, colors: &[Rgb], css: &str) -> ContentBlock {
    let fraction = 1.0 / colors.len() as f64;
    ContentBlock::Gradient(GradientBlock {
        gradient: GradientSpec::new(
            name,
            colors
                .iter()
                .map(|c| GradientStop::new(*c, fraction))
                .collect(),
        )
        .with_css(css),
        height: None,
    })
}

fn gradients(theme: &Theme) -> SectionSpec {
    SectionSpec::new("Gradients")
        .with_intro("Signature gradients used across buttons, backgrounds, and accent elements.")
        .block(even_gradient(
            "Primary CTA: brand-600 → brand-500",
            &[theme.primary, theme.bright],
            "linear-gradient(135deg, #1a6ef5, #338dff)",
        ))
        .block(even_gradient(
            "Hero / Header: navy → brand-600 → brand-500",
            &[theme.navy_dark, theme.primary, theme.bright],
            "linear-gradient(135deg, #142857 0%, #1a6ef5 50%, #338dff 100%)",
        ))
        .block(even_gradient(
            "Accent CTA: accent-500 → accent-400",
            &[theme.accent, theme.accent_light],
            "linear-gradient(135deg, #f97316, #fb923c)",
        ))
        .block(even_gradient(
            "Gradient Text: brand-600 → brand-500 → accent-500",
            &[theme.primary, theme.bright, theme.accent],
            "linear-gradient(135deg, #1a6ef5 0%, #338dff 50%, #f97316 100%)",
        ))
        .block(even_gradient(
            "Success: emerald-600 → emerald-500",
            &[theme.emerald_dark, theme.emerald],
            "linear-gradient(135deg, #059669, #10b981)",
        ))
        .block(even_gradient(
            "Logo Badge: brand-600 → brand-400",
            &[theme.primary, theme.light],
            "linear-gradient(to bottom right, #1a6ef5, #59b0ff)",
        ))
        .with_notes(notes(
            "We have 6 signature gradients for different use cases.",
            "Primary CTA uses brand-600 → brand-500, Hero uses navy → brand-600 → brand-500.",
            "Let's examine our typography system.",
        ))
}

fn typography() -> SectionSpec {
    SectionSpec::new("Typography")
        .with_intro(
            "A dual typeface system combining clean sans-serif for body text with elegant serif \
             for display elements.",
        )
        .block(subheading("Inter — Primary Typeface (Sans-Serif)"))
        .block(small(
            "Used for body text, navigation, buttons, labels, and all UI elements. Available \
             weights: Light (300) through Black (900).",
        ))
        .block(ContentBlock::Table(
            TableSpec::new(vec![
                ColumnSpec::new("Weight", 3).bold(),
                ColumnSpec::new("Size", 2),
                ColumnSpec::new("Usage", 6),
            ])
            .row(["Light (300)", "—", "Subtle body text, descriptions"])
            .row(["Regular (400)", "14-16px", "Body text, paragraphs"])
            .row(["Medium (500)", "13-14px", "Navigation, labels, badges"])
            .row(["SemiBold (600)", "14px", "Buttons, strong emphasis"])
            .row(["Bold (700)", "20-40px", "Section headers, card titles"])
            .row(["ExtraBold (800)", "48-60px", "Hero headlines, H1"])
            .row(["Black (900)", "—", "Special emphasis only"]),
        ))
        .block(subheading("Playfair Display — Display Typeface (Serif)"))
        .block(small(
            "Used sparingly for hero headlines and special emphasis. Conveys elegance and \
             authority. Available in Bold (700) and ExtraBold (800).",
        ))
        .block(subheading("Type Scale"))
        .block(ContentBlock::Table(
            TableSpec::new(vec![
                ColumnSpec::new("Element", 3).bold(),
                ColumnSpec::new("Font", 3),
                ColumnSpec::new("Size", 2),
                ColumnSpec::new("Weight", 3),
            ])
            .row(["Hero H1", "Inter", "48-60px", "ExtraBold (800)"])
            .row(["Section H2", "Inter", "36-40px", "Bold (700)"])
            .row(["Card H3", "Inter", "20-24px", "SemiBold (600)"])
            .row(["Body", "Inter", "14-16px", "Regular (400)"])
            .row(["Small / Label", "Inter", "12-13px", "Medium (500)"])
            .row(["Caption", "Inter", "10-11px", "Medium, uppercase"])
            .row(["Display", "Playfair Display", "36-60px", "Bold/ExtraBold"]),
        ))
        .block(subheading("Font Loading"))
        .block(ContentBlock::Paragraph(
            Paragraph::from_runs(vec![TextRun::monospace(
                "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800;900\
                 &family=Playfair+Display:wght@700;800&display=swap",
            )])
            .with_role(TextRole::Caption),
        ))
        .with_notes(notes(
            "Two fonts — Inter for everything, Playfair Display for special headlines.",
            "Inter has 7 weights (300-900). Playfair Display has Bold and ExtraBold.",
            "Let's look at how these translate into UI components.",
        ))
}

fn buttons() -> SectionSpec {
    SectionSpec::new("Buttons & UI Components")
        .block(subheading("Button Variants"))
        .block(ContentBlock::Table(
            TableSpec::new(vec![
                ColumnSpec::new("Variant", 2).bold(),
                ColumnSpec::new("Background", 4),
                ColumnSpec::new("Text", 2),
                ColumnSpec::new("Shadow", 2),
                ColumnSpec::new("Usage", 4),
            ])
            .row([
                "Primary",
                "gradient(#1a6ef5, #338dff)",
                "White",
                "brand-500/30",
                "Main CTA: Get Started, Apply Now",
            ])
            .row([
                "Secondary",
                "White + 2px brand border",
                "#1a6ef5",
                "None",
                "Secondary: Explore Services",
            ])
            .row([
                "Accent",
                "gradient(#f97316, #fb923c)",
                "White",
                "accent-500/30",
                "Highlight CTA",
            ])
            .row(["Dark", "#142857 solid", "White", "None", "Subtle: Learn More"]),
        ))
        .block(caption(
            "Border-radius: 100px (pill shape)  •  Padding: 12px 28px  •  Font: Inter SemiBold \
             14px  •  Transition: 300ms",
        ))
        .block(subheading("UI Effects"))
        .block(ContentBlock::Table(
            TableSpec::new(vec![
                ColumnSpec::new("Effect", 2).bold(),
                ColumnSpec::new("CSS Properties", 6).monospace(),
                ColumnSpec::new("Usage", 3),
            ])
            .row([
                "Glass Morphism",
                "bg: rgba(255,255,255,0.08); backdrop-filter: blur(20px);\nborder: 1px solid rgba(255,255,255,0.15)",
                "Hero stats, overlaid cards",
            ])
            .row([
                "Card Hover",
                "transform: translateY(-8px);\nbox-shadow: 0 25px 60px rgba(0,0,0,0.12)",
                "Service cards, feature cards",
            ])
            .row([
                "Pulse Glow",
                "box-shadow: 0 0 20-40px rgba(26,110,245,0.3-0.6)",
                "Active states, attention draw",
            ])
            .row([
                "Scroll Reveal",
                "opacity: 0→1; translateY(30px)→0;\ntransition: 0.8s ease",
                "Section entrance animations",
            ]),
        ))
        .with_notes(notes(
            "4 button variants and 4 key UI effects define our component system.",
            "All buttons use pill shape (100px radius), transitions at 300ms.",
            "Let's discuss our core brand values.",
        ))
}

fn values(theme: &Theme) -> SectionSpec {
    SectionSpec::new("Brand Values")
        .with_intro("Four pillars guide every decision, from product design to customer service.")
        .block(ContentBlock::Grid(GridSpec::new(
            2,
            vec![
                CardSpec::new(
                    "Trust",
                    "RBI regulated partners, IRDAI registered, ISO 27001 compliant. Security and compliance at our core.",
                    theme.primary,
                ),
                CardSpec::new(
                    "Speed",
                    "Swift paperless loan approvals. Quick turnaround powered by 50+ banking partners.",
                    theme.logo_gold,
                ),
                CardSpec::new(
                    "Expertise",
                    "24/7 expert support. 500+ Cr loans disbursed. 10,000+ happy customers served.",
                    theme.emerald,
                ),
                CardSpec::new(
                    "Simplicity",
                    "Clean, modern, and accessible. Making financial decisions easy for every Indian.",
                    theme.accent,
                ),
            ],
        )))
        .with_notes(notes(
            "Trust, Speed, Expertise, and Simplicity are our four brand pillars.",
            "These values guide every decision from product design to customer service.",
            "Let's wrap up with contact info and compliance details.",
        ))
}

fn contact(identity: &IdentityConfig, theme: &Theme) -> SectionSpec {
    let website = format!("https://{}", identity.domain);
    let mut section = SectionSpec::new("Contact & Compliance")
        .block(subheading("Company Details"))
        .block(ContentBlock::Table(pairs(
            "Field",
            "Value",
            &[
                ("Company Name", identity.company.as_str()),
                ("Tagline", identity.tagline.as_str()),
                ("Description", identity.description.as_str()),
                ("Domain", identity.domain.as_str()),
                ("Industry", identity.industry.as_str()),
                ("Copyright", identity.copyright.as_str()),
            ],
        )))
        .block(subheading("Contact Information"))
        .block(ContentBlock::Table(
            pairs(
                "Channel",
                "Details",
                &[
                    ("Phone", identity.phone.as_str()),
                    ("Email", identity.email.as_str()),
                    ("Website", website.as_str()),
                    ("Social", "Facebook  •  Twitter/X  •  LinkedIn  •  Instagram"),
                ],
            )
            .with_header_fill(theme.primary),
        ))
        .block(subheading("Compliance & Certifications"));

    for (badge, description) in [
        (
            "RBI Regulated Partners",
            "All banking partners are regulated by the Reserve Bank of India",
        ),
        (
            "IRDAI Registered",
            "Insurance products through IRDAI registered entities",
        ),
        (
            "ISO 27001 Compliant",
            "Information security management system compliance",
        ),
    ] {
        section = section.block(ContentBlock::Callout(check(badge, description, theme)));
    }

    section
        .block(caption(&format!(
            "Disclaimer: {} acts as a facilitator. All financial products are subject to \
             respective institution policies. Interest rates may vary based on individual \
             eligibility and market conditions.",
            identity.company
        )))
        .with_notes(notes(
            &format!(
                "Contact us at {} or {}.",
                identity.phone, identity.email
            ),
            "We maintain RBI, IRDAI, and ISO 27001 compliance across all partners.",
            "Finally, let's review the technical specifications.",
        ))
}

fn technical(theme: &Theme) -> SectionSpec {
    SectionSpec::new("Technical Specifications")
        .with_intro("Technology stack and dependencies powering the CredSuvidha website.")
        .block(ContentBlock::Grid(
            GridSpec::new(
                3,
                vec![
                    CardSpec::new(
                        "CSS Framework",
                        "Tailwind CSS via CDN\n(cdn.tailwindcss.com) with custom\nbrand theme configuration",
                        theme.primary,
                    ),
                    CardSpec::new(
                        "Typography",
                        "Google Fonts: Inter (300-900) +\nPlayfair Display (700-800)\nPreconnected for performance",
                        theme.logo_gold,
                    ),
                    CardSpec::new(
                        "JavaScript",
                        "Vanilla JS — scroll reveal,\ncounter animation, mobile menu,\nsmooth scroll, form handling",
                        theme.emerald,
                    ),
                    CardSpec::new(
                        "Architecture",
                        "Single-page HTML application\nNo build step required\nAll-in-one file deployment",
                        theme.accent,
                    ),
                    CardSpec::new(
                        "Hosting",
                        "Netlify (static hosting)\nCustom domain: www.credsuvidha.com\nGit-based deployment",
                        theme.navy,
                    ),
                    CardSpec::new(
                        "Version Control",
                        "Git repository\nPushed to remote\nContinuous deployment via Netlify",
                        theme.bright,
                    ),
                ],
            )
            .with_style(CardStyle::LeftAccent),
        ))
        .block(subheading("Asset Inventory"))
        .block(ContentBlock::Table(
            TableSpec::new(vec![
                ColumnSpec::new("Asset", 2).bold(),
                ColumnSpec::new("File Path", 4).monospace(),
                ColumnSpec::new("Purpose", 4),
            ])
            .row(["Primary Logo", "logo.png", "Full logo — symbol + wordmark + tagline"])
            .row([
                "Logo (Assets)",
                "assets/images/logo.png",
                "Same logo in organized assets folder",
            ])
            .row([
                "Brand Kit (HTML)",
                "assets/brandkit/brand-guidelines.html",
                "Interactive visual brand guidelines",
            ])
            .row([
                "Brand Kit (PDF)",
                "assets/brandkit/CredSuvidha-BrandKit.pdf",
                "Printable brand guidelines",
            ])
            .row([
                "Brand Kit (PPTX)",
                "assets/brandkit/CredSuvidha-BrandKit.pptx",
                "Presentation deck with speaker notes",
            ])
            .row([
                "Brand Tokens",
                "assets/brandkit/brand-tokens.json",
                "Machine-readable design tokens",
            ])
            .row(["Website", "index.html", "Main website (single-page application)"])
            .row([
                "Netlify Config",
                "netlify.toml",
                "Deployment config with headers & redirects",
            ]),
        ))
        .with_notes(notes(
            "The website is a single HTML file deployed on Netlify with no build step.",
            "Tailwind CSS + Google Fonts + Vanilla JS. All resources are CDN-based.",
            "Let's summarize what we've covered in this brand kit.",
        ))
}

fn takeaways(theme: &Theme) -> SectionSpec {
    SectionSpec::new("Key Takeaways")
        .block(ContentBlock::Grid(
            GridSpec::new(
                2,
                vec![
                    CardSpec::new(
                        "Logo",
                        "Interlocking C&S with growth arrow — navy + gold on light backgrounds",
                        theme.primary,
                    ),
                    CardSpec::new(
                        "Colors",
                        "Primary #1A6EF5  •  Navy #142857  •  Accent #F97316  •  Emerald #10B981",
                        theme.navy,
                    ),
                    CardSpec::new(
                        "Typography",
                        "Inter (sans-serif) for everything  •  Playfair Display (serif) for display",
                        theme.logo_gold,
                    ),
                    CardSpec::new(
                        "Buttons",
                        "4 variants: Primary, Secondary, Accent, Dark — all pill-shaped (100px radius)",
                        theme.emerald,
                    ),
                    CardSpec::new(
                        "Values",
                        "Trust, Speed, Expertise, Simplicity — every decision guided by these pillars",
                        theme.accent,
                    ),
                    CardSpec::new(
                        "Compliance",
                        "RBI Regulated  •  IRDAI Registered  •  ISO 27001 Compliant",
                        theme.primary,
                    ),
                    CardSpec::new(
                        "Tech Stack",
                        "Tailwind CSS + Inter/Playfair fonts + Vanilla JS → Netlify deployment",
                        theme.navy,
                    ),
                ],
            )
            .with_style(CardStyle::LeftAccent),
        ))
        .block(ContentBlock::Callout(
            Callout::new(
                vec![
                    TextRun::bold("This brand kit is a living document. "),
                    TextRun::plain(
                        "As CredSuvidha evolves, update this guide to reflect new brand elements, \
                         services, and visual standards. Consistency is key to building a strong, \
                         trusted brand presence.",
                    ),
                ],
                theme.tint,
            )
            .with_border(theme.primary),
        ))
        .with_notes(notes(
            "Recap of all brand kit elements covered.",
            "7 key areas — logo, colors, typography, buttons, values, compliance, tech.",
            "Thank you for reviewing the CredSuvidha brand kit.",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient;

    fn kit() -> Document {
        brand_kit(&IdentityConfig::default(), &Theme::default(), "October 2026").unwrap()
    }

    #[test]
    fn test_date_label() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(date_label(date), "October 2026");
    }

    #[test]
    fn test_split_tagline() {
        assert_eq!(
            split_tagline("Trusted Partner. Swift Solutions."),
            ("Trusted Partner. ".to_string(), "Swift Solutions.".to_string())
        );
        assert_eq!(
            split_tagline("Just one"),
            ("Just one".to_string(), String::new())
        );
    }

    #[test]
    fn test_section_order() {
        let headings: Vec<String> = kit().sections.into_iter().map(|s| s.heading).collect();
        assert_eq!(
            headings,
            vec![
                "Brand Overview",
                "Logo",
                "Color Palette",
                "Gradients",
                "Typography",
                "Buttons & UI Components",
                "Brand Values",
                "Contact & Compliance",
                "Technical Specifications",
                "Key Takeaways",
            ]
        );
    }

    #[test]
    fn test_every_section_has_notes() {
        let doc = kit();
        assert_eq!(doc.notes_count(), doc.sections.len());
        assert!(doc.cover.notes.is_some());
        assert!(doc.closing.as_ref().unwrap().notes.is_some());
        for section in &doc.sections {
            let notes = section.notes.as_deref().unwrap();
            assert!(notes.starts_with("[KEY POINT]: "));
            assert!(notes.contains("\n[DATA]: "));
        }
    }

    #[test]
    fn test_palette_counts() {
        let doc = kit();
        let palette = doc.section("Color Palette").unwrap();
        let counts: Vec<usize> = palette
            .blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Swatch(p) => Some(p.tokens.len()),
                _ => None,
            })
            .collect();
        assert_eq!(counts, vec![11, 3, 6, 4, 8]);
    }

    #[test]
    fn test_gradients_are_valid() {
        let doc = kit();
        let section = doc.section("Gradients").unwrap();
        let mut count = 0;
        for block in &section.blocks {
            if let ContentBlock::Gradient(g) = block {
                gradient::validate(&g.gradient.name, &g.gradient.stops).unwrap();
                assert!(g.gradient.css.starts_with("linear-gradient("));
                count += 1;
            }
        }
        assert_eq!(count, 6);
    }

    #[test]
    fn test_identity_flows_into_document() {
        let identity = IdentityConfig {
            company: "Acme".to_string(),
            domain: "acme.test".to_string(),
            tagline: "Fast. Cheap.".to_string(),
            ..Default::default()
        };
        let doc = brand_kit(&identity, &Theme::default(), "May 2026").unwrap();
        assert_eq!(doc.meta.title, "Acme Brand Kit");
        assert_eq!(doc.frame.footer_right, "acme.test");
        assert_eq!(doc.frame.footer_left, "Acme — Fast. Cheap.");
        assert!(doc.cover.info.contains(&("Date".to_string(), "May 2026".to_string())));
        assert_eq!(
            doc.closing.unwrap().tagline,
            ("Fast. ".to_string(), "Cheap.".to_string())
        );
    }

    #[test]
    fn test_stat_cards() {
        let doc = kit();
        let overview = doc.section("Brand Overview").unwrap();
        let grid = overview
            .blocks
            .iter()
            .find_map(|b| match b {
                ContentBlock::Grid(g) => Some(g),
                _ => None,
            })
            .unwrap();
        assert_eq!(grid.style, CardStyle::Stat);
        assert_eq!(grid.cards.len(), 4);
        assert_eq!(grid.cards[0].title, "500+ Cr");
    }
}
