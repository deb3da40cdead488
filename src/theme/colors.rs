//! Colors - Catalog Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Application color palette, accessed via associated functions
pub struct AppColors;

impl AppColors {
    // Primary colors
    /// Header background - Deep red
    pub fn header_bg() -> Rgba { rgb(0xb50938) }
    /// Primary accent
    pub fn accent() -> Rgba { rgb(0xb50938) }
    /// Selected row tint
    pub fn accent_soft() -> Rgba { rgb(0xfbe9ee) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f4) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Log panel background
    pub fn log_panel_bg() -> Rgba { rgb(0x1c1917) }
    /// Modal backdrop
    pub fn overlay() -> Rgba { rgba(0x0000007a) }

    // Text colors
    pub fn text_primary() -> Rgba { rgb(0x1c1917) }
    pub fn text_secondary() -> Rgba { rgb(0x57534e) }
    pub fn text_muted() -> Rgba { rgb(0xa8a29e) }
    /// Text on dark backgrounds
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    pub fn danger_bg() -> Rgba { rgb(0xfef2f2) }

    // Border colors
    pub fn border() -> Rgba { rgb(0xe7e5e4) }
    pub fn border_focus() -> Rgba { rgb(0xb50938) }

    // Button colors
    pub fn button_primary_bg() -> Rgba { rgb(0xb50938) }
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    pub fn button_ghost_text() -> Rgba { rgb(0x57534e) }

    // Table colors
    pub fn table_header_bg() -> Rgba { rgb(0xfafaf9) }
    pub fn table_row_hover() -> Rgba { rgb(0xf5f5f4) }
    pub fn table_row_alt() -> Rgba { rgb(0xfafaf9) }

    // Input colors
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_border() -> Rgba { rgb(0xd6d3d1) }
    pub fn input_placeholder() -> Rgba { rgb(0xa8a29e) }
}
