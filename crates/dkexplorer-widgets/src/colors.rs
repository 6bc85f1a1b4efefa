//! Tailwind color palette subset and tone styles.

use egui::Color32;

/// A Tailwind color with all shade variants (50-950).
#[derive(Clone, Copy)]
pub struct TailwindColor {
    /// Color name (e.g., "Red", "Blue")
    pub name: &'static str,
    /// Shades from 50 to 950 (11 total)
    pub shades: [Color32; 11],
}

impl TailwindColor {
    /// Create a new TailwindColor from RGB tuples.
    pub const fn new(name: &'static str, shades: [(u8, u8, u8); 11]) -> Self {
        let mut out = [Color32::TRANSPARENT; 11];
        let mut i = 0;
        while i < 11 {
            out[i] = Color32::from_rgb(shades[i].0, shades[i].1, shades[i].2);
            i += 1;
        }
        Self { name, shades: out }
    }

    /// Get shade by Tailwind level (50, 100, ..., 900, 950).
    ///
    /// Unknown levels fall back to 500.
    pub const fn level(&self, level: u16) -> Color32 {
        let index = match level {
            50 => 0,
            100 => 1,
            200 => 2,
            300 => 3,
            400 => 4,
            600 => 6,
            700 => 7,
            800 => 8,
            900 => 9,
            950 => 10,
            _ => 5,
        };
        self.shades[index]
    }
}

/// The Tailwind colors used by the explorer.
pub struct TailwindPalette;

impl TailwindPalette {
    /// Get all colors in the palette
    pub fn all() -> &'static [TailwindColor] {
        TAILWIND_COLORS
    }

    /// Get color by name
    pub fn by_name(name: &str) -> Option<&'static TailwindColor> {
        TAILWIND_COLORS.iter().find(|c| c.name == name)
    }
}

// Tailwind CSS colors - https://tailwindcss.com/docs/colors
pub const TAILWIND_COLORS: &[TailwindColor] = &[RED, ORANGE, GREEN, TEAL, BLUE, INDIGO, PURPLE, SLATE];

pub const RED: TailwindColor = TailwindColor::new("Red", [
    (254, 242, 242), (254, 226, 226), (254, 202, 202), (252, 165, 165),
    (248, 113, 113), (239, 68, 68), (220, 38, 38), (185, 28, 28),
    (153, 27, 27), (127, 29, 29), (69, 10, 10),
]);

pub const ORANGE: TailwindColor = TailwindColor::new("Orange", [
    (255, 247, 237), (255, 237, 213), (254, 215, 170), (253, 186, 116),
    (251, 146, 60), (249, 115, 22), (234, 88, 12), (194, 65, 12),
    (154, 52, 18), (124, 45, 18), (67, 20, 7),
]);

pub const GREEN: TailwindColor = TailwindColor::new("Green", [
    (240, 253, 244), (220, 252, 231), (187, 247, 208), (134, 239, 172),
    (74, 222, 128), (34, 197, 94), (22, 163, 74), (21, 128, 61),
    (22, 101, 52), (20, 83, 45), (5, 46, 22),
]);

pub const TEAL: TailwindColor = TailwindColor::new("Teal", [
    (240, 253, 250), (204, 251, 241), (153, 246, 228), (94, 234, 212),
    (45, 212, 191), (20, 184, 166), (13, 148, 136), (15, 118, 110),
    (17, 94, 89), (19, 78, 74), (4, 47, 46),
]);

pub const BLUE: TailwindColor = TailwindColor::new("Blue", [
    (239, 246, 255), (219, 234, 254), (191, 219, 254), (147, 197, 253),
    (96, 165, 250), (59, 130, 246), (37, 99, 235), (29, 78, 216),
    (30, 64, 175), (30, 58, 138), (23, 37, 84),
]);

pub const INDIGO: TailwindColor = TailwindColor::new("Indigo", [
    (238, 242, 255), (224, 231, 255), (199, 210, 254), (165, 180, 252),
    (129, 140, 248), (99, 102, 241), (79, 70, 229), (67, 56, 202),
    (55, 48, 163), (49, 46, 129), (30, 27, 75),
]);

pub const PURPLE: TailwindColor = TailwindColor::new("Purple", [
    (250, 245, 255), (243, 232, 255), (233, 213, 255), (216, 180, 254),
    (192, 132, 252), (168, 85, 247), (147, 51, 234), (126, 34, 206),
    (107, 33, 168), (88, 28, 135), (59, 7, 100),
]);

pub const SLATE: TailwindColor = TailwindColor::new("Slate", [
    (248, 250, 252), (241, 245, 249), (226, 232, 240), (203, 213, 225),
    (148, 163, 184), (100, 116, 139), (71, 85, 105), (51, 65, 85),
    (30, 41, 59), (15, 23, 42), (2, 6, 23),
]);

/// Shades of one color family used to style a tinted panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneStyle {
    /// Heading text (600).
    pub text: Color32,
    /// Panel background (100).
    pub background: Color32,
    /// Accent border (200).
    pub border: Color32,
    /// Faint caption text (300).
    pub caption: Color32,
}

impl ToneStyle {
    /// Derive a tone style from a Tailwind color.
    pub const fn from_color(color: &TailwindColor) -> Self {
        Self {
            text: color.level(600),
            background: color.level(100),
            border: color.level(200),
            caption: color.level(300),
        }
    }
}
