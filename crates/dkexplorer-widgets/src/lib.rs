//! Reusable egui panel components with Tailwind-inspired styling.
//!
//! This crate provides the styled building blocks of the explorer page:
//!
//! - **Cards**: Info cards, tinted stage banners, callouts
//! - **Colors**: Tailwind color palette subset, tone styles
//! - **Frames**: Page card, header and footer bands
//! - **Icons**: Tinted SVG icons
//! - **Layout**: Separators, captions, badges

pub mod cards;
pub mod colors;
pub mod frames;
pub mod icons;
pub mod layout;

pub use cards::{callout, InfoCard, StageBanner};
pub use colors::{
    TailwindColor, TailwindPalette, ToneStyle, BLUE, GREEN, INDIGO, ORANGE, PURPLE, RED, SLATE,
    TAILWIND_COLORS, TEAL,
};
pub use frames::{body_frame, footer_frame, header_frame, page_frame};
pub use icons::Icon;
pub use layout::{badge, caption_text, separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Default icon edge length
    pub const ICON: f32 = 20.0;
    /// Width of the accent border on tinted panels
    pub const ACCENT_BORDER: f32 = 8.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
    /// Page card corner radius
    pub const PAGE_RADIUS: u8 = 12;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Heading text color (slate 700)
    pub const TEXT: Color32 = Color32::from_rgb(51, 65, 85);
    /// Body text color (slate 600)
    pub const TEXT_BODY: Color32 = Color32::from_rgb(71, 85, 105);
    /// Muted text color (slate 400)
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(148, 163, 184);
    /// Border color (slate 200)
    pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240);
    /// Divider inside cards (slate 100)
    pub const DIVIDER: Color32 = Color32::from_rgb(241, 245, 249);
}
