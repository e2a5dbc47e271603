//! Color parsing and WCAG 2.1 contrast math.
//!
//! Skins store colors as hex strings. Everything here works on those
//! strings directly so derivers never need to carry parsed colors around.

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// WCAG 2.1 relative luminance in `[0, 1]`. Alpha is ignored.
    pub fn relative_luminance(self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` into a `Color`.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
    match s.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&s[i..=i], 16).ok().map(|n| n * 17);
            Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        },
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// Whether `s` is a well-formed hex color.
pub fn is_hex_color(s: &str) -> bool {
    parse_hex_color(s).is_some()
}

/// Relative luminance of a hex color, or `None` if it does not parse.
pub fn relative_luminance(hex: &str) -> Option<f64> {
    parse_hex_color(hex).map(Color::relative_luminance)
}

/// Unrounded WCAG contrast ratio between two hex colors.
pub fn raw_contrast_ratio(a: &str, b: &str) -> Option<f64> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    Some((hi + 0.05) / (lo + 0.05))
}

/// WCAG contrast ratio between two hex colors, rounded to two decimals.
///
/// Order independent. Black on white is exactly `21.0`; any color against
/// itself is exactly `1.0`.
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    raw_contrast_ratio(a, b).map(|r| (r * 100.0).round() / 100.0)
}

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagLevel {
    Aa,
    Aaa,
}

impl WcagLevel {
    /// Minimum contrast ratio for this level.
    pub fn min_ratio(self, large_text: bool) -> f64 {
        match (self, large_text) {
            (WcagLevel::Aa, false) => 4.5,
            (WcagLevel::Aa, true) => 3.0,
            (WcagLevel::Aaa, false) => 7.0,
            (WcagLevel::Aaa, true) => 4.5,
        }
    }
}

/// Check a foreground/background pair against a WCAG level.
///
/// Unparseable colors never pass.
pub fn meets_contrast_requirement(fg: &str, bg: &str, level: WcagLevel, large_text: bool) -> bool {
    raw_contrast_ratio(fg, bg).is_some_and(|r| r >= level.min_ratio(large_text))
}

/// Append an alpha channel to a hex color.
///
/// `alpha` is a fraction in `[0, 1]`. An existing alpha channel is
/// replaced. This is not compositing; `#611F69` at 0.1 becomes `#611F691A`.
/// Unparseable input is returned unchanged.
pub fn with_alpha_hex(hex: &str, alpha: f64) -> String {
    match parse_hex_color(hex) {
        Some(c) => {
            let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("#{:02X}{:02X}{:02X}{:02X}", c.r, c.g, c.b, a)
        },
        None => hex.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_colors() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(
            parse_hex_color("#00FF0080"),
            Some(Color::rgba(0, 255, 0, 128))
        );
        assert_eq!(parse_hex_color("#fff"), Some(Color::WHITE));
        assert_eq!(parse_hex_color("#1a2"), Some(Color::rgb(0x11, 0xAA, 0x22)));
        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("not-a-color"), None);
        assert_eq!(parse_hex_color("#+1+2+3"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn to_hex_formats() {
        assert_eq!(Color::rgb(0x61, 0x1F, 0x69).to_hex(), "#611F69");
        assert_eq!(Color::rgba(0, 0, 0, 0x80).to_hex(), "#00000080");
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(relative_luminance("#000000"), Some(0.0));
        let white = relative_luminance("#FFFFFF").unwrap();
        assert!((white - 1.0).abs() < 1e-9);
        assert_eq!(relative_luminance("nope"), None);
    }

    #[test]
    fn contrast_black_white_is_21() {
        assert_eq!(contrast_ratio("#000000", "#FFFFFF"), Some(21.0));
        assert_eq!(contrast_ratio("#FFF", "#000"), Some(21.0));
    }

    #[test]
    fn contrast_known_pair() {
        // #767676 on white is the classic 4.54:1 AA boundary gray.
        assert_eq!(contrast_ratio("#767676", "#FFFFFF"), Some(4.54));
        assert!(meets_contrast_requirement(
            "#767676",
            "#FFFFFF",
            WcagLevel::Aa,
            false
        ));
        assert!(!meets_contrast_requirement(
            "#767676",
            "#FFFFFF",
            WcagLevel::Aaa,
            false
        ));
    }

    #[test]
    fn contrast_thresholds() {
        assert_eq!(WcagLevel::Aa.min_ratio(false), 4.5);
        assert_eq!(WcagLevel::Aa.min_ratio(true), 3.0);
        assert_eq!(WcagLevel::Aaa.min_ratio(false), 7.0);
        assert_eq!(WcagLevel::Aaa.min_ratio(true), 4.5);
        // #949494 on white is ~3.03: large text only.
        assert!(meets_contrast_requirement("#949494", "#FFFFFF", WcagLevel::Aa, true));
        assert!(!meets_contrast_requirement("#949494", "#FFFFFF", WcagLevel::Aa, false));
    }

    #[test]
    fn invalid_colors_never_pass() {
        assert_eq!(contrast_ratio("#000000", "bogus"), None);
        assert!(!meets_contrast_requirement("bogus", "#FFFFFF", WcagLevel::Aa, true));
    }

    #[test]
    fn alpha_append() {
        assert_eq!(with_alpha_hex("#611F69", 0.10), "#611F691A");
        assert_eq!(with_alpha_hex("#611F69", 0.06), "#611F690F");
        assert_eq!(with_alpha_hex("#fff", 0.5), "#FFFFFF80");
        assert_eq!(with_alpha_hex("#00000040", 1.0), "#000000FF");
        assert_eq!(with_alpha_hex("nope", 0.5), "nope");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn hex6() -> impl Strategy<Value = String> {
            any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::rgb(r, g, b).to_hex())
        }

        proptest! {
            #[test]
            fn contrast_is_symmetric(a in hex6(), b in hex6()) {
                prop_assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
            }

            #[test]
            fn contrast_in_range(a in hex6(), b in hex6()) {
                let r = contrast_ratio(&a, &b).unwrap();
                prop_assert!((1.0..=21.0).contains(&r), "ratio out of range: {r}");
            }

            #[test]
            fn contrast_with_self_is_one(a in hex6()) {
                prop_assert_eq!(contrast_ratio(&a, &a), Some(1.0));
            }

            #[test]
            fn to_hex_roundtrips(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
                let c = Color::rgba(r, g, b, a);
                prop_assert_eq!(parse_hex_color(&c.to_hex()), Some(c));
            }
        }
    }
}
