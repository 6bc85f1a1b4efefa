//! Vello-based renderer implementation.

use crate::renderer::{
    GRID_SPACING, MARKER_RADIUS, PAGE_RADIUS, RenderContext, RenderResult, Renderer, RendererError,
};
use dkexplorer_core::{area_path, curve_path, ChartGeometry};
use kurbo::{Affine, BezPath, Cap, Circle, Join, Line, Point, Rect, Stroke};
use peniko::{Color, Fill, Gradient};
use vello::wgpu;
use vello::{RenderParams, RendererOptions, Scene};

/// Create the GPU-side Vello renderer for a device.
pub fn create_gpu_renderer(device: &wgpu::Device) -> RenderResult<vello::Renderer> {
    vello::Renderer::new(device, RendererOptions::default())
        .map_err(|e| RendererError::InitFailed(e.to_string()))
}

/// Render a scene into a storage-capable texture view.
pub fn render_to_texture(
    renderer: &mut vello::Renderer,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    scene: &Scene,
    view: &wgpu::TextureView,
    params: &RenderParams,
) -> RenderResult<()> {
    renderer
        .render_to_texture(device, queue, scene, view, params)
        .map_err(|e| RendererError::RenderFailed(e.to_string()))
}

/// Vello-based renderer for the explorer chart.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    geometry: ChartGeometry,
    /// Curve polyline, built once per geometry.
    curve: BezPath,
    /// Area under the curve, built once per geometry.
    area: BezPath,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        let geometry = ChartGeometry::default();
        Self {
            scene: Scene::new(),
            geometry,
            curve: curve_path(&geometry),
            area: area_path(&geometry),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Rebuild cached paths if the frame uses a different geometry.
    fn sync_geometry(&mut self, geometry: ChartGeometry) {
        if geometry != self.geometry {
            log::debug!("Chart geometry changed, rebuilding curve paths");
            self.geometry = geometry;
            self.curve = curve_path(&geometry);
            self.area = area_path(&geometry);
        }
    }

    /// Render the page card with its drop shadow.
    fn render_page(&mut self, ctx: &RenderContext, page: Rect) {
        let transform = ctx.screen_transform();
        let shadow = page + kurbo::Vec2::new(0.0, 8.0);
        self.scene.draw_blurred_rounded_rect(
            transform,
            shadow,
            Color::from_rgba8(15, 23, 42, 40),
            PAGE_RADIUS,
            12.0,
        );

        let card = page.to_rounded_rect(PAGE_RADIUS);
        self.scene.fill(Fill::NonZero, transform, ctx.palette.page, None, &card);
        self.scene.stroke(&Stroke::new(1.0), transform, ctx.palette.page_border, None, &card);
    }

    /// Render the white chart area and its left/bottom axis border.
    fn render_surface(&mut self, ctx: &RenderContext, transform: Affine) {
        let bounds = self.geometry.bounds();
        self.scene.fill(Fill::NonZero, transform, ctx.palette.surface, None, &bounds);

        let stroke = Stroke::new(1.0);
        let left = Line::new(Point::new(bounds.x0, bounds.y0), Point::new(bounds.x0, bounds.y1));
        let bottom = Line::new(Point::new(bounds.x0, bounds.y1), Point::new(bounds.x1, bounds.y1));
        self.scene.stroke(&stroke, transform, ctx.palette.axis, None, &left);
        self.scene.stroke(&stroke, transform, ctx.palette.axis, None, &bottom);
    }

    /// Render grid lines clipped to the chart bounds.
    fn render_grid_lines(&mut self, bounds: Rect, transform: Affine, color: Color) {
        let stroke = Stroke::new(1.0);
        let mut path = BezPath::new();

        // Batched into one path
        let mut x = bounds.x0;
        while x <= bounds.x1 {
            path.move_to(Point::new(x, bounds.y0));
            path.line_to(Point::new(x, bounds.y1));
            x += GRID_SPACING;
        }
        let mut y = bounds.y0;
        while y <= bounds.y1 {
            path.move_to(Point::new(bounds.x0, y));
            path.line_to(Point::new(bounds.x1, y));
            y += GRID_SPACING;
        }

        self.scene.stroke(&stroke, transform, color, None, &path);
    }

    /// Render the gradient-filled area and the curve stroke.
    fn render_curve(&mut self, ctx: &RenderContext, transform: Affine) {
        let bounds = self.geometry.bounds();
        let area = ctx.palette.area;
        let gradient = Gradient::new_linear(
            Point::new(bounds.x0, bounds.y0),
            Point::new(bounds.x0, bounds.y1),
        )
        .with_stops([(0.0, area.with_alpha(0.4)), (1.0, area.with_alpha(0.0))]);
        self.scene.fill(Fill::NonZero, transform, &gradient, None, &self.area);

        let stroke = Stroke::new(4.0).with_caps(Cap::Round).with_join(Join::Round);
        self.scene.stroke(&stroke, transform, ctx.palette.curve, None, &self.curve);
    }

    /// Render the marker, its ring and the dashed guide lines.
    fn render_marker(&mut self, ctx: &RenderContext, transform: Affine) {
        let marker = ctx.view.marker;

        let guide = Stroke::new(1.0).with_dashes(0.0, [4.0, 4.0]);
        self.scene.stroke(&guide, transform, ctx.palette.guide, None, &ctx.view.vertical_guide());
        self.scene.stroke(&guide, transform, ctx.palette.guide, None, &ctx.view.horizontal_guide());

        let (ring_radius, ring_alpha) = ctx.ring();
        if ring_alpha > 0.0 {
            let ring = Circle::new(marker, ring_radius);
            let ring_color = ctx.palette.curve.with_alpha(ring_alpha as f32);
            self.scene.fill(Fill::NonZero, transform, ring_color, None, &ring);
        }

        let dot = Circle::new(marker, MARKER_RADIUS);
        self.scene.fill(Fill::NonZero, transform, ctx.palette.marker_fill, None, &dot);
        self.scene.stroke(&Stroke::new(3.0), transform, ctx.palette.curve, None, &dot);
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        // Clear the scene
        self.scene.reset();
        self.sync_geometry(ctx.geometry);

        if let Some(page) = ctx.page {
            self.render_page(ctx, page);
        }

        let transform = ctx.chart_transform();
        self.render_surface(ctx, transform);

        use crate::renderer::GridStyle;
        match ctx.grid_style {
            GridStyle::None => {}
            GridStyle::Lines => {
                let bounds = self.geometry.bounds();
                self.render_grid_lines(bounds, transform, ctx.palette.grid);
            }
        }

        self.render_curve(ctx, transform);
        self.render_marker(ctx, transform);
    }
}
