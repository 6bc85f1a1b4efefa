//! Renderer trait abstraction.

use dkexplorer_core::{ChartGeometry, ChartView};
use kurbo::{Affine, Point, Rect};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Spacing of the background grid, in chart units.
pub const GRID_SPACING: f64 = 40.0;

/// Radius of the draggable marker.
pub const MARKER_RADIUS: f64 = 8.0;

/// Resting radius of the pulsing ring around the marker.
pub const RING_RADIUS: f64 = 16.0;

/// Corner radius of the page card.
pub const PAGE_RADIUS: f64 = 12.0;

/// Peak opacity of the pulsing ring.
const RING_ALPHA: f64 = 0.2;

/// Grid display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStyle {
    /// Plain white chart.
    None,
    /// Faint square grid.
    #[default]
    Lines,
}

/// Colors used to draw the chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartPalette {
    /// Page card fill.
    pub page: Color,
    /// Page card border.
    pub page_border: Color,
    /// Chart area fill.
    pub surface: Color,
    /// Left and bottom axis border.
    pub axis: Color,
    pub grid: Color,
    /// Curve stroke and marker outline.
    pub curve: Color,
    /// Gradient color under the curve (alpha is applied by the renderer).
    pub area: Color,
    /// Dashed guide lines.
    pub guide: Color,
    pub marker_fill: Color,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            page: Color::WHITE,
            page_border: Color::from_rgba8(226, 232, 240, 255), // Slate 200
            surface: Color::WHITE,
            axis: Color::from_rgba8(203, 213, 225, 255), // Slate 300
            grid: Color::from_rgba8(0, 0, 0, 26),
            curve: Color::from_rgba8(79, 70, 229, 255), // Indigo 600
            area: Color::from_rgba8(99, 102, 241, 255), // Indigo 500
            guide: Color::from_rgba8(148, 163, 184, 255), // Slate 400
            marker_fill: Color::WHITE,
        }
    }
}

/// Radius and opacity of the decorative ring for a pulse phase in `[0, 1)`.
///
/// The ring grows to twice its size and fades out over the first three
/// quarters of the cycle, then stays hidden.
pub fn pulse_ring(phase: f64) -> (f64, f64) {
    let t = (phase.rem_euclid(1.0) / 0.75).min(1.0);
    (RING_RADIUS * (1.0 + t), RING_ALPHA * (1.0 - t))
}

/// Context for a single render frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Derived chart values for this frame.
    pub view: ChartView,
    pub geometry: ChartGeometry,
    /// Top-left corner of the chart surface in logical points.
    pub origin: Point,
    /// Page card behind the chart, in logical points.
    pub page: Option<Rect>,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    pub grid_style: GridStyle,
    pub palette: ChartPalette,
    /// Pulse phase of the marker ring in `[0, 1)`. `None` draws a static ring.
    pub pulse_phase: Option<f64>,
}

impl RenderContext {
    /// Create a new render context with the chart at the origin.
    pub fn new(view: ChartView, geometry: ChartGeometry) -> Self {
        Self {
            view,
            geometry,
            origin: Point::ZERO,
            page: None,
            scale_factor: 1.0,
            grid_style: GridStyle::Lines,
            palette: ChartPalette::default(),
            pulse_phase: None,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set where the chart surface sits on screen, in logical points.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Set the page card rectangle, in logical points.
    pub fn with_page(mut self, page: Option<Rect>) -> Self {
        self.page = page;
        self
    }

    /// Set the grid style.
    pub fn with_grid(mut self, style: GridStyle) -> Self {
        self.grid_style = style;
        self
    }

    /// Set the chart palette.
    pub fn with_palette(mut self, palette: ChartPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the marker ring pulse phase.
    pub fn with_pulse_phase(mut self, phase: Option<f64>) -> Self {
        self.pulse_phase = phase;
        self
    }

    /// Transform from chart coordinates to physical pixels.
    pub fn chart_transform(&self) -> Affine {
        Affine::scale(self.scale_factor) * Affine::translate(self.origin.to_vec2())
    }

    /// Transform from logical points to physical pixels.
    pub fn screen_transform(&self) -> Affine {
        Affine::scale(self.scale_factor)
    }

    /// Ring radius and opacity for this frame.
    pub fn ring(&self) -> (f64, f64) {
        match self.pulse_phase {
            Some(phase) => pulse_ring(phase),
            None => (RING_RADIUS, RING_ALPHA),
        }
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, wgpu directly, or other rendering engines.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    ///
    /// This method is called once per frame and should prepare all drawing commands.
    fn build_scene(&mut self, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> RenderContext {
        let geometry = ChartGeometry::new();
        RenderContext::new(ChartView::new(20, &geometry), geometry)
    }

    #[test]
    fn test_chart_transform() {
        let ctx = context()
            .with_origin(Point::new(100.0, 40.0))
            .with_scale_factor(2.0);
        let marker = ctx.chart_transform() * ctx.view.marker;
        assert!((marker.x - 520.0).abs() < 1e-10);
        assert!((marker.y - 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_pulse_ring() {
        let (radius, alpha) = pulse_ring(0.0);
        assert!((radius - RING_RADIUS).abs() < f64::EPSILON);
        assert!((alpha - RING_ALPHA).abs() < f64::EPSILON);

        let (radius, alpha) = pulse_ring(0.75);
        assert!((radius - RING_RADIUS * 2.0).abs() < 1e-10);
        assert!(alpha.abs() < 1e-10);

        let (_, hidden) = pulse_ring(0.9);
        assert!(hidden.abs() < 1e-10);

        // Phase wraps
        let (wrapped, _) = pulse_ring(1.25);
        let (direct, _) = pulse_ring(0.25);
        assert!((wrapped - direct).abs() < 1e-10);
    }

    #[test]
    fn test_static_ring_without_phase() {
        let (radius, alpha) = context().ring();
        assert!((radius - RING_RADIUS).abs() < f64::EPSILON);
        assert!((alpha - RING_ALPHA).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grid_lines_by_default() {
        assert_eq!(GridStyle::default(), GridStyle::Lines);
        assert_eq!(context().grid_style, GridStyle::Lines);
    }
}
