//! Shared inline-style fragments
//!
//! The page is styled with inline `style` attributes; the fragments used by
//! more than one section live here so spacing and card chrome stay uniform.

/// Outer wrapper for every page section
pub const SECTION: &str = "padding: 80px 24px; max-width: 1280px; margin: 0 auto;";

/// Section headline
pub const SECTION_TITLE: &str =
    "font-size: 36px; font-weight: bold; text-align: center; margin-bottom: 16px;";

/// Section subtitle line under the headline
pub const SECTION_SUBTITLE: &str =
    "color: #9CA3AF; text-align: center; max-width: 672px; margin: 0 auto 64px auto; font-size: 18px;";

/// Standard card chrome
pub const CARD: &str = "background-color: rgba(31, 41, 55, 0.5); border: 1px solid rgba(55, 65, 81, 1); border-radius: 12px; padding: 24px;";

/// Primary call-to-action button
pub const PRIMARY_BUTTON: &str = "background-color: #7C3AED; color: white; padding: 12px 24px; border: none; border-radius: 8px; font-weight: 500; font-size: 16px;";

/// Secondary (outline) button
pub const SECONDARY_BUTTON: &str = "background-color: transparent; color: white; padding: 12px 24px; border: 1px solid rgba(75, 85, 99, 1); border-radius: 8px; font-weight: 500; font-size: 16px;";

/// De-emphasized copy
pub const MUTED_TEXT: &str = "color: #9CA3AF;";

/// Small caption copy
pub const CAPTION_TEXT: &str = "color: #9CA3AF; font-size: 14px;";

/// Three-column card grid
pub const GRID_3: &str =
    "display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 24px;";

/// Two-column card grid
pub const GRID_2: &str =
    "display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 32px;";

/// Window-chrome dot row shown on fake application frames
pub fn window_dot(color: &str) -> String {
    format!(
        "width: 12px; height: 12px; border-radius: 9999px; background-color: {color}; margin-right: 8px;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_are_nonempty() {
        for fragment in [
            SECTION,
            SECTION_TITLE,
            SECTION_SUBTITLE,
            CARD,
            PRIMARY_BUTTON,
            SECONDARY_BUTTON,
            MUTED_TEXT,
            CAPTION_TEXT,
            GRID_3,
            GRID_2,
        ] {
            assert!(!fragment.is_empty());
            assert!(fragment.ends_with(';'), "fragment should be composable: {fragment}");
        }
    }

    #[test]
    fn test_window_dot_embeds_color() {
        let dot = window_dot("#EF4444");
        assert!(dot.contains("#EF4444"));
    }
}
