use anyhow::Result;
use clap::Parser;
use fractalspace_assets::{Palette, ShaderSource};
use fractalspace_input::{InputSnapshot, InputSource, NullGamepad};
use fractalspace_nav::{NavConfig, NavSession, Phase};
use fractalspace_platform::{DesktopPlatform, Platform};
use fractalspace_render::accept_resize;
use fractalspace_render_wgpu::FractalRenderer;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "fractalspace-desktop", about = "Real-time Mandelbrot viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding shaders and other resources
    #[arg(long, default_value = "./assets")]
    assets_dir: String,

    /// Escape-iteration budget handed to the kernel
    #[arg(long, default_value = "256")]
    iterations: u32,

    /// Palette preset: deep-sea, fire, grayscale
    #[arg(long, default_value = "deep-sea")]
    palette: String,

    /// Let panning leave the default clamp box
    #[arg(long)]
    unclamped: bool,
}

/// Application state outside the GPU objects.
struct AppState {
    session: NavSession,
    pad: Box<dyn InputSource>,
    keys_held: HashSet<KeyCode>,
    last_frame: Instant,
}

impl AppState {
    fn new(config: NavConfig) -> Self {
        Self {
            session: NavSession::new(config),
            pad: Box::new(NullGamepad),
            keys_held: HashSet::new(),
            last_frame: Instant::now(),
        }
    }

    /// Gamepad snapshot when the provider has a device this frame,
    /// keyboard fallback otherwise.
    fn snapshot(&mut self) -> InputSnapshot {
        self.pad
            .poll()
            .unwrap_or_else(|| keyboard_snapshot(&self.keys_held))
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys_held.insert(key);
        } else {
            self.keys_held.remove(&key);
        }
    }
}

/// Fixed gamepad-equivalent keyboard mapping: WASD pans, E/Q zooms,
/// Escape exits.
fn keyboard_snapshot(keys: &HashSet<KeyCode>) -> InputSnapshot {
    InputSnapshot {
        left: keys.contains(&KeyCode::KeyA),
        right: keys.contains(&KeyCode::KeyD),
        up: keys.contains(&KeyCode::KeyW),
        down: keys.contains(&KeyCode::KeyS),
        zoom_in: keys.contains(&KeyCode::KeyE),
        zoom_out: keys.contains(&KeyCode::KeyQ),
        exit: keys.contains(&KeyCode::Escape),
    }
}

struct GpuApp {
    state: AppState,
    shader: ShaderSource,
    palette: Palette,
    iterations: u32,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<FractalRenderer>,
}

impl GpuApp {
    fn new(shader: ShaderSource, palette: Palette, iterations: u32, nav: NavConfig) -> Self {
        Self {
            state: AppState::new(nav),
            shader,
            palette,
            iterations,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Fractalspace")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("fractalspace_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // No fractal to show without a working kernel: any compile or
        // link diagnostic is fatal.
        let renderer = match FractalRenderer::new(
            &device,
            &queue,
            surface_format,
            &self.shader.wgsl,
            &self.palette,
            self.iterations,
        ) {
            Ok(renderer) => renderer,
            Err(e) => {
                tracing::error!(shader = %self.shader.path.display(), "fatal: {e}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                // Minimization reports a zero-area framebuffer; keep the
                // previous surface configuration.
                if !accept_resize(new_size.width, new_size.height) {
                    return;
                }
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width;
                    config.height = new_size.height;
                    surface.configure(device, config);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = (now - self.state.last_frame).as_secs_f32().min(0.1);
                self.state.last_frame = now;

                // Input and state update come before the draw that reads
                // the state; a frame that terminates the session draws
                // nothing.
                let snapshot = self.state.snapshot();
                if self.state.session.advance(&snapshot, dt) == Phase::Terminated {
                    event_loop.exit();
                    return;
                }

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let target = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(device, queue, &target, &self.state.session.view());
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("fractalspace-desktop starting");

    let mut platform = DesktopPlatform::new(&cli.assets_dir);
    platform.init()?;

    let shader = ShaderSource::load(platform.resource_root().join("shaders/mandelbrot.wgsl"))?;
    let palette = Palette::by_name(&cli.palette)?;

    let mut nav = NavConfig::default();
    if cli.unclamped {
        nav.bounds = None;
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(shader, palette, cli.iterations, nav);
    event_loop.run_app(&mut app)?;

    platform.shutdown();
    tracing::info!("fractalspace-desktop done");

    Ok(())
}
