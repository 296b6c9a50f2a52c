//! Color palette for the SafeDrome dark theme.
//!
//! RGB values follow the product mockup's design tokens.

#![allow(dead_code)]

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(14, 15, 17); // App background (#0E0F11)
pub const CARD_BG: Color = Color::Rgb(26, 28, 30); // Panel/card backgrounds (#1A1C1E)
pub const INPUT_BG: Color = Color::Rgb(15, 17, 19); // Form input wells (#0F1113)
pub const HOVER_BG: Color = Color::Rgb(32, 35, 38); // Hover/selection rows (#202326)

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(42, 46, 49); // Inactive borders (#2A2E31)
pub const BORDER_BRIGHT: Color = Color::Rgb(57, 64, 69); // Hovered borders (#394045)

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(45, 212, 191); // Teal primary actions
pub const ACCENT_DIM: Color = Color::Rgb(13, 148, 136); // Pressed/dimmed teal

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(231, 233, 234); // Primary text (#E7E9EA)
pub const TEXT_MUTED: Color = Color::Rgb(154, 164, 174); // Secondary text (#9AA4AE)

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(45, 212, 191); // Saved/success
pub const STATUS_RED: Color = Color::Rgb(248, 113, 113); // Validation errors, Retry
pub const STATUS_YELLOW: Color = Color::Rgb(251, 191, 36); // Warnings, badges

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8); // Modal drop shadow

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backgrounds_match_design_tokens() {
        assert_eq!(DEEPEST_BG, Color::Rgb(14, 15, 17));
        assert_eq!(CARD_BG, Color::Rgb(26, 28, 30));
        assert_eq!(BORDER_DIM, Color::Rgb(42, 46, 49));
    }

    #[test]
    fn test_text_colors_are_rgb() {
        assert!(matches!(TEXT_PRIMARY, Color::Rgb(..)));
        assert!(matches!(TEXT_MUTED, Color::Rgb(..)));
    }
}
