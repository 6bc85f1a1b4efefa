//! Layout helpers: separators, captions, badges.

use egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

use crate::theme;

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 4.0;
    ui.painter().line_segment(
        [
            egui::Pos2::new(rect.left(), y),
            egui::Pos2::new(rect.right(), y),
        ],
        Stroke::new(1.0, theme::DIVIDER),
    );
    ui.add_space(8.0);
}

/// Widely spaced uppercase caption, as used for axis titles.
pub fn caption_text(text: &str, color: Color32) -> RichText {
    // egui has no letter-spacing; thin spaces approximate the tracking
    let spaced: String = text
        .chars()
        .flat_map(|c| [c, '\u{2009}'])
        .collect::<String>()
        .trim_end()
        .to_string();
    RichText::new(spaced).size(11.0).strong().color(color)
}

/// Monospace badge on a dark rounded background.
pub fn badge(ui: &mut Ui, text: &str, fill: Color32, color: Color32) {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(crate::sizing::CORNER_RADIUS))
        .inner_margin(Margin::symmetric(12, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(text).monospace().size(11.0).color(color));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_text_spacing() {
        let text = caption_text("AXIS", Color32::GRAY);
        assert_eq!(text.text(), "A\u{2009}X\u{2009}I\u{2009}S");
    }

    #[test]
    fn test_caption_text_empty() {
        assert_eq!(caption_text("", Color32::GRAY).text(), "");
    }
}
