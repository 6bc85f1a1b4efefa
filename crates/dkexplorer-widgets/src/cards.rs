//! Card components: info cards, tinted stage banners, callouts.

use egui::{
    Color32, CornerRadius, Frame, ImageSource, Margin, Pos2, Rect, Response, RichText, Stroke, Ui,
};

use crate::colors::ToneStyle;
use crate::icons::Icon;
use crate::{sizing, theme};

/// White card with an icon + title header, a divider and a body paragraph.
pub struct InfoCard<'a> {
    title: &'a str,
    body: &'a str,
    icon: Option<(ImageSource<'a>, Color32)>,
}

impl<'a> InfoCard<'a> {
    pub fn new(title: &'a str, body: &'a str) -> Self {
        Self {
            title,
            body,
            icon: None,
        }
    }

    /// Show a tinted icon before the title.
    pub fn icon(mut self, icon: ImageSource<'a>, tint: Color32) -> Self {
        self.icon = Some((icon, tint));
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        Frame::new()
            .fill(Color32::WHITE)
            .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
            .stroke(Stroke::new(1.0, theme::BORDER))
            .shadow(egui::epaint::Shadow {
                spread: 0,
                blur: 4,
                offset: [0, 1],
                color: Color32::from_black_alpha(10),
            })
            .inner_margin(Margin::same(20))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    if let Some((icon, tint)) = self.icon {
                        Icon::new(icon).size(20.0).tint(tint).show(ui);
                    }
                    ui.label(RichText::new(self.title).strong().size(15.0).color(theme::TEXT));
                });
                crate::layout::separator(ui);
                ui.label(RichText::new(self.body).size(13.0).color(theme::TEXT_BODY));
            })
            .response
    }
}

/// Tinted panel with a thick accent border on its left edge.
pub struct StageBanner<'a> {
    title: &'a str,
    tone: ToneStyle,
    icon: Option<ImageSource<'a>>,
    readout: Vec<String>,
}

impl<'a> StageBanner<'a> {
    pub fn new(title: &'a str, tone: ToneStyle) -> Self {
        Self {
            title,
            tone,
            icon: None,
            readout: Vec::new(),
        }
    }

    /// Icon shown before the title, tinted with the tone's text color.
    pub fn icon(mut self, icon: ImageSource<'a>) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Add a monospace readout entry; entries are spread across one row.
    pub fn readout(mut self, entry: impl Into<String>) -> Self {
        self.readout.push(entry.into());
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let accent = sizing::ACCENT_BORDER;
        let inner = Frame::new()
            .fill(self.tone.background)
            .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
            .inner_margin(Margin {
                left: 24 + accent as i8,
                right: 24,
                top: 24,
                bottom: 24,
            })
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    if let Some(icon) = self.icon {
                        Icon::new(icon).size(24.0).tint(self.tone.text).show(ui);
                    }
                    ui.label(RichText::new(self.title).strong().size(20.0).color(self.tone.text));
                });
                if !self.readout.is_empty() {
                    ui.add_space(8.0);
                    ui.columns(self.readout.len(), |columns| {
                        let last = columns.len() - 1;
                        for (i, (column, entry)) in columns.iter_mut().zip(&self.readout).enumerate() {
                            let text = RichText::new(entry).monospace().size(13.0).color(theme::TEXT_BODY);
                            if i == last && last > 0 {
                                column.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                                    ui.label(text);
                                });
                            } else {
                                column.label(text);
                            }
                        }
                    });
                }
            });

        let rect = inner.response.rect;
        let border = Rect::from_min_max(rect.min, Pos2::new(rect.min.x + accent, rect.max.y));
        ui.painter().rect_filled(
            border,
            CornerRadius {
                nw: sizing::PANEL_RADIUS,
                sw: sizing::PANEL_RADIUS,
                ne: 0,
                se: 0,
            },
            self.tone.border,
        );
        inner.response
    }
}

/// Bordered callout with an icon and a bold lead-in before the body text.
pub fn callout(
    ui: &mut Ui,
    icon: ImageSource<'_>,
    lead: &str,
    body: &str,
    fill: Color32,
    border: Color32,
    text: Color32,
) -> Response {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, border))
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_top(|ui| {
                Icon::new(icon).size(20.0).tint(text).show(ui);
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    ui.label(RichText::new(lead).strong().size(13.0).color(text));
                    ui.label(RichText::new(body).size(13.0).color(text));
                });
            });
        })
        .response
}
