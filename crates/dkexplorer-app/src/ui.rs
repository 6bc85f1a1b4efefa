//! UI components using egui.

use std::f32::consts::FRAC_PI_2;

use dkexplorer_core::{ChartState, ChartView, Stage, StageIcon, Tone};
use dkexplorer_widgets::{
    badge, body_frame, callout, caption_text, footer_frame, header_frame, page_frame, theme, Icon,
    InfoCard, StageBanner, ToneStyle, BLUE, GREEN, INDIGO, ORANGE, PURPLE, RED, SLATE, TEAL,
};
use std::sync::Arc;

use egui::epaint::TextShape;
use egui::scroll_area::ScrollSource;
use egui::{
    include_image, vec2, Align, Color32, Context, CursorIcon, FontId, FontSelection, Frame, Galley,
    ImageSource, Layout, Painter, Pos2, Rect, RichText, ScrollArea, Sense, Ui, Vec2,
};

const TITLE: &str = "The Dunning-Kruger Effect";
const SUBTITLE: &str = "Interactive analysis for HR & Psychology professionals";
const FORMULA: &str = "CONFIDENCE(competence)";
const INSTRUCTIONS: &str = "Drag the dot along the curve or click anywhere on the graph to simulate \
an employee's journey from novice to expert. Observe how their confidence fluctuates relative to \
their actual competence.";
const FOOTER: &str = "© 2025 HR/Psychology Interactive Tools • Based on the work of David Dunning \
and Justin Kruger (1999)";

/// Widest the page card grows.
const PAGE_MAX_WIDTH: f32 = 896.0;
/// Space around the page card.
const PAGE_MARGIN: f32 = 16.0;
/// Padding inside the page body.
const BODY_PADDING: f32 = 24.0;
/// Room under the chart for the competence axis caption.
const AXIS_CAPTION_SPACE: f32 = 40.0;
/// Viewports narrower than this hide the header badge and stack the cards.
const WIDE_VIEWPORT: f32 = 768.0;

/// How the page arranges the header badge and the two info cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageLayout {
    /// Badge shown, cards side by side.
    #[default]
    Columns,
    /// Badge hidden, cards stacked.
    Stacked,
}

impl PageLayout {
    /// Layout for a viewport width in logical points.
    pub fn for_viewport(width: f32) -> Self {
        if width >= WIDE_VIEWPORT {
            PageLayout::Columns
        } else {
            PageLayout::Stacked
        }
    }
}

/// Layout results reported back to the app after each frame.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Where the chart surface was laid out, in logical points.
    pub chart_rect: Option<Rect>,
    /// Page card behind the content, in logical points.
    pub page_rect: Option<Rect>,
    /// Whether the pointer is over the chart surface.
    pub chart_hovered: bool,
    /// Arrangement used for the last frame.
    pub layout: PageLayout,
}

/// Render the explorer page.
///
/// The chart surface itself is left unpainted: the canvas draws the curve
/// beneath egui and only the captions are overlaid here.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState, chart: &ChartState) {
    egui_extras::install_image_loaders(ctx);

    ui_state.chart_rect = None;
    ui_state.page_rect = None;
    ui_state.chart_hovered = false;

    // The page never shrinks below the chart, so decide from the viewport
    let layout = PageLayout::for_viewport(ctx.input(|i| i.content_rect()).width());
    ui_state.layout = layout;

    let view = chart.view();
    let chart_size = vec2(chart.geometry().width() as f32, chart.geometry().height as f32);

    egui::CentralPanel::default().frame(Frame::NONE).show(ctx, |ui| {
        // Dragging belongs to the chart marker, not to page scrolling
        ScrollArea::both()
            .auto_shrink([false, false])
            .scroll_source(ScrollSource {
                drag: false,
                ..ScrollSource::ALL
            })
            .show(ui, |ui| {
                let page_width = (ui.available_width() - 2.0 * PAGE_MARGIN)
                    .min(PAGE_MAX_WIDTH)
                    .max(chart_size.x + 2.0 * BODY_PADDING);

                ui.add_space(PAGE_MARGIN);
                ui.vertical_centered(|ui| {
                    let page = page_frame().show(ui, |ui| {
                        ui.set_width(page_width);
                        ui.spacing_mut().item_spacing.y = 0.0;
                        ui.with_layout(Layout::top_down(Align::Min), |ui| {
                            render_header(ui, layout);
                            body_frame().show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.spacing_mut().item_spacing.y = 8.0;
                                render_body(ui, ui_state, &view, chart_size, layout);
                            });
                            render_footer(ui);
                        });
                    });
                    ui_state.page_rect = Some(page.response.rect);
                });
                ui.add_space(PAGE_MARGIN);
            });
    });

    if chart.is_dragging() {
        ctx.set_cursor_icon(CursorIcon::Grabbing);
    } else if ui_state.chart_hovered {
        ctx.set_cursor_icon(CursorIcon::Grab);
    }
}

/// Dark title band with the formula badge.
fn render_header(ui: &mut Ui, layout: PageLayout) {
    header_frame(SLATE.level(900)).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    Icon::new(include_image!("../assets/brain.svg"))
                        .size(32.0)
                        .tint(INDIGO.level(400))
                        .show(ui);
                    ui.label(RichText::new(TITLE).strong().size(24.0).color(Color32::WHITE));
                });
                ui.add_space(4.0);
                ui.label(RichText::new(SUBTITLE).size(13.0).color(SLATE.level(400)));
            });
            if layout == PageLayout::Columns {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    badge(ui, FORMULA, SLATE.level(800), INDIGO.level(300));
                });
            }
        });
    });
}

fn render_body(
    ui: &mut Ui,
    ui_state: &mut UiState,
    view: &ChartView,
    chart_size: Vec2,
    layout: PageLayout,
) {
    callout(
        ui,
        include_image!("../assets/info.svg"),
        "Instructions:",
        INSTRUCTIONS,
        INDIGO.level(50),
        INDIGO.level(100),
        INDIGO.level(800),
    );
    ui.add_space(16.0);

    ui.vertical_centered(|ui| {
        let (rect, response) = ui.allocate_exact_size(chart_size, Sense::hover());
        ui_state.chart_rect = Some(rect);
        ui_state.chart_hovered = response.hovered();
        paint_chart_captions(ui.painter(), rect);
    });
    ui.add_space(AXIS_CAPTION_SPACE);

    let info = view.stage.info();
    StageBanner::new(info.name, tone_style(info.tone))
        .icon(stage_icon(info.icon))
        .readout(format!("Competence: {}%", view.competence))
        .readout(format!("Confidence: {}%", view.confidence_percent()))
        .show(ui);
    ui.add_space(16.0);

    let psychology = InfoCard::new("Psychological Perspective", info.psychology)
        .icon(include_image!("../assets/brain.svg"), PURPLE.level(600));
    let strategy = InfoCard::new("HR Management Strategy", info.strategy)
        .icon(include_image!("../assets/briefcase.svg"), TEAL.level(600));

    match layout {
        PageLayout::Columns => {
            ui.spacing_mut().item_spacing.x = 24.0;
            ui.columns(2, |columns| {
                psychology.show(&mut columns[0]);
                strategy.show(&mut columns[1]);
            });
        }
        PageLayout::Stacked => {
            psychology.show(ui);
            ui.add_space(16.0);
            strategy.show(ui);
        }
    }
}

fn render_footer(ui: &mut Ui) {
    footer_frame(SLATE.level(50)).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(FOOTER).size(11.0).color(theme::TEXT_MUTED));
        });
    });
}

/// Axis titles and the per-stage captions drawn over the chart surface.
fn paint_chart_captions(painter: &Painter, chart: Rect) {
    let axis_color = SLATE.level(400);

    // Horizontal axis, centered under the chart
    let galley = rich_galley(painter, caption_text("COMPETENCE (Wisdom)", axis_color));
    let pos = Pos2::new(chart.center().x - galley.size().x / 2.0, chart.bottom() + 16.0);
    painter.galley(pos, galley, axis_color);

    // Vertical axis, reading bottom to top in the left gutter
    let galley = rich_galley(painter, caption_text("CONFIDENCE", axis_color));
    let size = galley.size();
    let center = Pos2::new(chart.left() - BODY_PADDING / 2.0 - 2.0, chart.center().y);
    let pos = Pos2::new(center.x - size.y / 2.0, center.y + size.x / 2.0);
    painter.add(TextShape::new(pos, galley, axis_color).with_angle(-FRAC_PI_2));

    for stage in Stage::ALL {
        let (Some(caption), Some(placement)) = (stage.info().caption, caption_placement(stage)) else {
            continue;
        };
        let color = tone_style(stage.tone()).caption;
        let galleys: Vec<_> = caption
            .lines()
            .map(|line| painter.layout_no_wrap(line.to_string(), FontId::proportional(12.0), color))
            .collect();
        let block = galleys.iter().fold(Vec2::ZERO, |size, galley| {
            vec2(size.x.max(galley.size().x), size.y + galley.size().y)
        });

        let rect = placement.rect(chart, block);
        let mut y = rect.top();
        for galley in galleys {
            let height = galley.size().y;
            let x = rect.center().x - galley.size().x / 2.0;
            painter.galley(Pos2::new(x, y), galley, color);
            y += height;
        }
    }
}

/// Lay out styled text on one line, keeping its weight, size and color.
fn rich_galley(painter: &Painter, text: RichText) -> Arc<Galley> {
    let job = egui::WidgetText::from(text).into_layout_job(&painter.ctx().style(), FontSelection::Default, Align::Min);
    let job = Arc::unwrap_or_clone(job);
    painter.layout_job(job)
}

/// Position of a stage caption, as fractions of the chart size.
///
/// Every caption block is shifted left by half its own width after anchoring.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CaptionPlacement {
    x: f32,
    y: f32,
    /// `x` anchors the block's right edge instead of its left edge.
    right_edge: bool,
    /// `y` anchors the block's bottom edge instead of its top edge.
    bottom_edge: bool,
}

impl CaptionPlacement {
    fn rect(&self, chart: Rect, size: Vec2) -> Rect {
        let anchor_x = chart.left() + self.x * chart.width();
        let anchor_y = chart.top() + self.y * chart.height();
        let left = if self.right_edge { anchor_x - size.x } else { anchor_x } - size.x / 2.0;
        let top = if self.bottom_edge { anchor_y - size.y } else { anchor_y };
        Rect::from_min_size(Pos2::new(left, top), size)
    }
}

fn caption_placement(stage: Stage) -> Option<CaptionPlacement> {
    match stage {
        Stage::MountStupid => Some(CaptionPlacement {
            x: 0.15,
            y: 0.10,
            right_edge: false,
            bottom_edge: false,
        }),
        Stage::ValleyOfDespair => Some(CaptionPlacement {
            x: 0.38,
            y: 0.80,
            right_edge: false,
            bottom_edge: true,
        }),
        Stage::SlopeOfEnlightenment => None,
        Stage::PlateauOfSustainability => Some(CaptionPlacement {
            x: 0.95,
            y: 0.30,
            right_edge: true,
            bottom_edge: false,
        }),
    }
}

fn tone_style(tone: Tone) -> ToneStyle {
    match tone {
        Tone::Red => ToneStyle::from_color(&RED),
        Tone::Orange => ToneStyle::from_color(&ORANGE),
        Tone::Blue => ToneStyle::from_color(&BLUE),
        Tone::Green => ToneStyle::from_color(&GREEN),
    }
}

fn stage_icon(icon: StageIcon) -> ImageSource<'static> {
    match icon {
        StageIcon::AlertTriangle => include_image!("../assets/alert-triangle.svg"),
        StageIcon::HelpCircle => include_image!("../assets/help-circle.svg"),
        StageIcon::TrendingUp => include_image!("../assets/trending-up.svg"),
        StageIcon::CheckCircle => include_image!("../assets/check-circle.svg"),
    }
}
