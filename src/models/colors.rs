//! Color palette shared by sections and charts

use serde::Serialize;

/// RGB color representation (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to CSS rgb() string
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Convert to CSS rgba() string with the given alpha
    pub fn to_css_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Convert to hex string (#RRGGBB)
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Semantic tone used across cards, badges, and chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Brand purple
    Accent,
    /// Informational blue
    Info,
    /// Positive green
    Success,
    /// Cautionary amber
    Warning,
    /// Negative red
    Danger,
    /// De-emphasized gray
    Muted,
}

/// Map a semantic tone to its display color
///
/// Pure function - always returns the same color for the same tone.
pub fn tone_color(tone: Tone) -> RgbColor {
    match tone {
        Tone::Accent => RgbColor::new(168, 85, 247),  // Purple
        Tone::Info => RgbColor::new(59, 130, 246),    // Blue
        Tone::Success => RgbColor::new(16, 185, 129), // Green
        Tone::Warning => RgbColor::new(245, 158, 11), // Amber
        Tone::Danger => RgbColor::new(239, 68, 68),   // Red
        Tone::Muted => RgbColor::new(156, 163, 175),  // Gray
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_color_deterministic() {
        let color1 = tone_color(Tone::Accent);
        let color2 = tone_color(Tone::Accent);
        assert_eq!(color1, color2); // Pure function
    }

    #[test]
    fn test_all_tones_have_unique_colors() {
        let tones = [
            Tone::Accent,
            Tone::Info,
            Tone::Success,
            Tone::Warning,
            Tone::Danger,
            Tone::Muted,
        ];

        for (i, a) in tones.iter().enumerate() {
            for b in tones.iter().skip(i + 1) {
                assert_ne!(tone_color(*a), tone_color(*b));
            }
        }
    }

    #[test]
    fn test_css_output() {
        let color = RgbColor::new(168, 85, 247);
        assert_eq!(color.to_css(), "rgb(168, 85, 247)");
    }

    #[test]
    fn test_css_alpha_output() {
        let color = RgbColor::new(59, 130, 246);
        assert_eq!(color.to_css_alpha(0.2), "rgba(59, 130, 246, 0.2)");
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(tone_color(Tone::Accent).to_hex(), "#A855F7");
        assert_eq!(tone_color(Tone::Info).to_hex(), "#3B82F6");
        assert_eq!(tone_color(Tone::Success).to_hex(), "#10B981");
        assert_eq!(tone_color(Tone::Warning).to_hex(), "#F59E0B");
        assert_eq!(tone_color(Tone::Danger).to_hex(), "#EF4444");
        assert_eq!(tone_color(Tone::Muted).to_hex(), "#9CA3AF");
    }

    #[test]
    fn test_tone_serialization() {
        let json = serde_json::to_string(&Tone::Success).unwrap_or_default();
        assert_eq!(json, r#""success""#);
    }
}
