//! Core application state and lifecycle.

use std::sync::Arc;

use dkexplorer_core::{ChartState, PointerEvent};
use dkexplorer_render::{
    create_gpu_renderer, render_to_texture, GridStyle, RenderContext, Renderer, RendererError,
    VelloRenderer,
};
use kurbo::Point;
use peniko::Color;
use thiserror::Error;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, Scene};
use winit::application::ApplicationHandler;
#[cfg(not(target_arch = "wasm32"))]
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
#[cfg(target_arch = "wasm32")]
use winit::event_loop::EventLoopProxy;
use winit::window::{Window, WindowId};

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use crate::event_handler::EventHandler;
use crate::ui::{render_ui, UiState};

/// Length of one marker ring pulse.
const PULSE_PERIOD_SECS: f64 = 1.0;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Failed to create surface: {0}")]
    Surface(String),
    #[error("Platform error: {0}")]
    Platform(String),
    #[error(transparent)]
    Renderer(#[from] RendererError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Smallest native window size; the chart is laid out at a fixed size.
    pub min_width: u32,
    pub min_height: u32,
    pub grid_style: GridStyle,
    pub background_color: Color,
    /// Pulse the ring around the marker.
    pub animate_ring: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Dunning-Kruger Explorer".to_string(),
            width: 1280,
            height: 900,
            min_width: 900,
            min_height: 600,
            grid_style: GridStyle::Lines,
            background_color: Color::from_rgba8(248, 250, 252, 255), // Slate 50
            animate_ring: true,
        }
    }
}

/// Surface created asynchronously on the web, handed back through the event loop.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub struct PendingSurface {
    render_cx: vello::util::RenderContext,
    surface: RenderSurface<'static>,
    window: Arc<Window>,
}

/// Events sent to the application from outside the event loop.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum AppEvent {
    SurfaceReady(Box<PendingSurface>),
    SurfaceFailed(String),
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    chart_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion (needed for WebGPU/WASM)
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // State
    chart: ChartState,
    config: AppConfig,
    started: Instant,

    // Event handling
    event_handler: EventHandler,
    #[cfg(target_arch = "wasm32")]
    release_listener: Option<crate::web::GlobalReleaseListener>,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// Window waiting for async surface creation (WASM only)
    pending_window: Option<Arc<Window>>,
    #[cfg(target_arch = "wasm32")]
    proxy: Option<EventLoopProxy<AppEvent>>,
    /// First fatal error, returned from [`App::launch`].
    error: Option<AppError>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            pending_window: None,
            #[cfg(target_arch = "wasm32")]
            proxy: None,
            error: None,
        }
    }

    /// Run the application with the default configuration.
    pub async fn run() -> Result<(), AppError> {
        Self::new().launch()
    }

    /// Run this application on a new event loop.
    ///
    /// Natively this blocks until the window closes. On the web the loop is
    /// handed to the browser and this returns immediately.
    pub fn launch(self) -> Result<(), AppError> {
        let event_loop = EventLoop::<AppEvent>::with_user_event().build()?;

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::EventLoopExtWebSys;
            let mut app = self;
            app.proxy = Some(event_loop.create_proxy());
            event_loop.spawn_app(app);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut app = self;
            event_loop.run_app(&mut app)?;
            if let Some(e) = app.error.take() {
                return Err(e);
            }
        }

        Ok(())
    }

    /// Record a fatal error and stop the event loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    /// Finish initialization after surface is created.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) -> Result<(), AppError> {
        let render_cx = self
            .render_cx
            .as_ref()
            .ok_or_else(|| AppError::Surface("RenderContext not initialized".into()))?;
        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = create_gpu_renderer(device)?;

        // Vello renders to Rgba8Unorm (for compute shader compatibility)
        // but the surface format on WebGPU is typically Bgra8Unorm
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        #[cfg(target_arch = "wasm32")]
        let release_listener = match crate::web::GlobalReleaseListener::register() {
            Ok(listener) => Some(listener),
            Err(e) => {
                log::warn!("Global release listeners unavailable: {:?}", e);
                None
            }
        };

        log::info!(
            "Explorer initialized - {}x{}",
            surface.config.width,
            surface.config.height
        );

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            chart_renderer: VelloRenderer::new(),
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state: UiState::default(),
            chart: ChartState::new(),
            config: self.config.clone(),
            started: Instant::now(),
            event_handler: EventHandler::new(),
            #[cfg(target_arch = "wasm32")]
            release_listener,
        });
        self.pending_window = None;

        // Request initial redraw
        window.request_redraw();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_min_inner_size(LogicalSize::new(self.config.min_width, self.config.min_height));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Surface size: {}x{}", width, height);

        // On native, block on async surface creation
        let render_cx = self.render_cx.get_or_insert_with(vello::util::RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| AppError::Surface(e.to_string()))?;

        self.finish_init(window, surface)
    }

    #[cfg(target_arch = "wasm32")]
    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attrs = crate::web::window_attributes(&self.config)?;
        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let (width, height) = crate::web::viewport_physical_size(&self.config)?;
        let proxy = self
            .proxy
            .clone()
            .ok_or_else(|| AppError::Platform("Event loop proxy missing".into()))?;

        self.pending_window = Some(window.clone());
        wasm_bindgen_futures::spawn_local(async move {
            log::info!("Creating surface asynchronously...");
            let mut render_cx = vello::util::RenderContext::new();
            let event = match render_cx
                .create_surface(window.clone(), width, height, PresentMode::AutoVsync)
                .await
            {
                Ok(surface) => AppEvent::SurfaceReady(Box::new(PendingSurface {
                    render_cx,
                    surface,
                    window,
                })),
                Err(e) => AppEvent::SurfaceFailed(e.to_string()),
            };
            if proxy.send_event(event).is_err() {
                log::warn!("Event loop closed before the surface was ready");
            }
        });
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Ring pulse phase for the current frame.
    fn pulse_phase(&self) -> Option<f64> {
        self.config
            .animate_ring
            .then(|| (self.started.elapsed().as_secs_f64() / PULSE_PERIOD_SECS).fract())
    }

    /// End any drag whose release happened outside the canvas.
    #[cfg(target_arch = "wasm32")]
    fn poll_global_release(&mut self) {
        if self.release_listener.as_ref().is_some_and(|l| l.take_release()) {
            self.chart.handle_pointer_event(PointerEvent::Release);
        }
    }

    /// Lay out the page, build the chart scene and present one frame.
    fn redraw(&mut self, render_cx: &vello::util::RenderContext) -> Result<(), AppError> {
        #[cfg(target_arch = "wasm32")]
        self.poll_global_release();

        // Run egui; the layout reports where the chart surface landed
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let ui_state = &mut self.ui_state;
        let chart = &self.chart;
        let egui_output = self.egui_ctx.run(egui_input, |ctx| render_ui(ctx, ui_state, chart));
        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);
        let egui_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        match self.ui_state.chart_rect {
            Some(rect) => self.chart.set_surface(to_kurbo_rect(rect)),
            None => self.chart.clear_surface(),
        }

        let scene = match self.ui_state.chart_rect {
            Some(rect) => {
                let ctx = RenderContext::new(self.chart.view(), *self.chart.geometry())
                    .with_origin(Point::new(rect.min.x as f64, rect.min.y as f64))
                    .with_page(self.ui_state.page_rect.map(to_kurbo_rect))
                    .with_scale_factor(egui_output.pixels_per_point as f64)
                    .with_grid(self.config.grid_style)
                    .with_pulse_phase(self.pulse_phase());
                self.chart_renderer.build_scene(&ctx);
                self.chart_renderer.take_scene()
            }
            None => {
                log::trace!("Chart surface not laid out, skipping chart");
                Scene::new()
            }
        };

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match self.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return Ok(());
            }
        };

        let width = self.surface.config.width;
        let height = self.surface.config.height;

        let params = RenderParams {
            base_color: self.config.background_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello needs a StorageBinding texture, which WebGPU only supports
        // for Rgba8Unorm; it is blitted to the surface format afterwards.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        render_to_texture(
            &mut self.vello_renderer,
            device,
            queue,
            &scene,
            &render_texture_view,
            &params,
        )?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        // Blit the RGBA intermediate texture to the surface texture (which may be BGRA)
        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            self.texture_blitter
                .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        // Update egui textures
        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        // Render egui on top
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });

            self.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load, // Keep Vello content
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu wants a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        // Free egui textures
        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();
        Ok(())
    }
}

fn to_kurbo_rect(rect: egui::Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}

impl ApplicationHandler<AppEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.pending_window.is_some() {
            return;
        }

        log::info!("Creating window...");
        if let Err(e) = self.create_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::SurfaceReady(pending) => {
                log::info!("Surface created successfully");
                let PendingSurface {
                    render_cx,
                    surface,
                    window,
                } = *pending;
                self.render_cx = Some(render_cx);
                if let Err(e) = self.finish_init(window, surface) {
                    self.fail(event_loop, e);
                }
            }
            AppEvent::SurfaceFailed(message) => {
                self.pending_window = None;
                self.fail(event_loop, AppError::Surface(message));
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        #[cfg(target_arch = "wasm32")]
        state.poll_global_release();

        // The chart follows the pointer wherever egui is; a press only
        // counts when it lands on the chart surface.
        let pixels_per_point = state.egui_ctx.pixels_per_point() as f64;
        if let Some(pointer_event) = state.event_handler.translate(&event, pixels_per_point) {
            if state.chart.handle_pointer_event(pointer_event) {
                log::trace!("Competence now {}", state.chart.competence());
                state.window.request_redraw();
            }
            if matches!(pointer_event, PointerEvent::Press { .. }) && !state.chart.is_dragging() {
                state.event_handler.reject_press();
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                if let Err(e) = state.redraw(render_cx) {
                    log::error!("Failed to render: {}", e);
                }
                state.window.request_redraw();
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("Shutting down");
        // Drops the window-level listeners on the web
        self.state = None;
    }
}
