//! Frame presets: page card, header band, footer band.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::{sizing, theme};

/// Layout frame for the page card.
///
/// The card fill, border and shadow are painted beneath egui by the chart
/// canvas so the chart surface inside it stays visible. This frame only
/// reserves the region.
pub fn page_frame() -> Frame {
    Frame::new()
        .fill(Color32::TRANSPARENT)
        .corner_radius(CornerRadius::same(sizing::PAGE_RADIUS))
        .inner_margin(Margin::ZERO)
}

/// Dark header band at the top of the page card.
pub fn header_frame(fill: Color32) -> Frame {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius {
            nw: sizing::PAGE_RADIUS,
            ne: sizing::PAGE_RADIUS,
            sw: 0,
            se: 0,
        })
        .inner_margin(Margin::same(24))
}

/// Muted footer band at the bottom of the page card.
pub fn footer_frame(fill: Color32) -> Frame {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius {
            nw: 0,
            ne: 0,
            sw: sizing::PAGE_RADIUS,
            se: sizing::PAGE_RADIUS,
        })
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(Margin::same(16))
}

/// Transparent frame with the standard body padding.
pub fn body_frame() -> Frame {
    Frame::new().inner_margin(Margin::same(24))
}
