//! Tinted icon images.

use egui::{Color32, Image, ImageSource, Rect, Sense, Ui, Vec2, vec2};

/// A fixed-size, tinted icon (SVG or raster).
pub struct Icon<'a> {
    source: ImageSource<'a>,
    size: Vec2,
    tint: Option<Color32>,
}

impl<'a> Icon<'a> {
    /// Create a new icon at the medium size.
    pub fn new(source: ImageSource<'a>) -> Self {
        Self {
            source,
            size: vec2(crate::sizing::ICON, crate::sizing::ICON),
            tint: None,
        }
    }

    /// Set the icon's edge length.
    pub fn size(mut self, size: f32) -> Self {
        self.size = vec2(size, size);
        self
    }

    /// Tint the icon with a color.
    pub fn tint(mut self, color: Color32) -> Self {
        self.tint = Some(color);
        self
    }

    /// Allocate space and paint the icon. Returns the painted rect.
    pub fn show(self, ui: &mut Ui) -> Rect {
        let (rect, _) = ui.allocate_exact_size(self.size, Sense::hover());
        if ui.is_rect_visible(rect) {
            self.paint_at(ui, rect);
        }
        rect
    }

    /// Paint the icon centered in `rect` without allocating.
    pub fn paint_at(self, ui: &Ui, rect: Rect) {
        let icon_rect = Rect::from_center_size(rect.center(), self.size);
        let mut image = Image::new(self.source).fit_to_exact_size(self.size);
        if let Some(tint) = self.tint {
            image = image.tint(tint);
        }
        image.paint_at(ui, icon_rect);
    }
}
