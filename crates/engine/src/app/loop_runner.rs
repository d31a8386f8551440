use std::thread;
use std::time::{Duration, Instant};

use pixels::{Error as PixelsError, Pixels, SurfaceTexture};
use thiserror::Error;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use super::input::InputCollector;
use super::rendering::FramePainter;
use super::scene::{Scene, SceneCommand};

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_tps: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "Engine".to_string(),
            window_width: 800,
            window_height: 800,
            target_tps: 60,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize framebuffer surface: {0}")]
    CreateSurface(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

struct Surface {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl Surface {
    fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, PixelsError> {
        let texture = SurfaceTexture::new(width, height, window);
        let pixels = Pixels::new(width, height, texture)?;
        Ok(Self {
            pixels,
            width,
            height,
        })
    }
}

/// Runs the cooperative frame loop until the scene asks to quit or the
/// window is closed. Single-threaded; the scene is the only mutator of
/// simulation state.
pub fn run_app(config: LoopConfig, mut scene: Box<dyn Scene>) -> Result<(), AppError> {
    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                config.window_width as f64,
                config.window_height as f64,
            ))
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    ));
    let mut surface = Surface::new(window, config.window_width, config.window_height)
        .map_err(AppError::CreateSurface)?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let target_tps = config.target_tps.max(1);
    let frame_target = Duration::from_secs_f64(1.0 / target_tps as f64);
    let mut input_collector = InputCollector::new();
    let mut last_present_instant = Instant::now();

    scene.load();
    info!(
        title = %config.window_title,
        width = config.window_width,
        height = config.window_height,
        target_tps,
        "loop_started"
    );

    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    input_collector.mark_quit_requested();
                    info!(reason = "window_close", "shutdown_requested");
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    if new_size.width == 0 || new_size.height == 0 {
                        return;
                    }
                    match Surface::new(window, new_size.width, new_size.height) {
                        Ok(rebuilt) => surface = rebuilt,
                        Err(error) => {
                            warn!(error = %error, "surface_resize_failed");
                            window_target.exit();
                        }
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input_collector.set_cursor_position_px(position.x, position.y);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input_collector.handle_mouse_input(button, state);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input_collector.handle_keyboard_input(&event);
                }
                WindowEvent::RedrawRequested => {
                    let events = input_collector.drain_frame_events();
                    if scene.update(&events) == SceneCommand::Quit {
                        info!(reason = "scene_quit", "shutdown_requested");
                        window_target.exit();
                        return;
                    }

                    // Single pacing sleep point; keeps the tick rate at the
                    // configured target without busy-spinning.
                    let elapsed = Instant::now().saturating_duration_since(last_present_instant);
                    if let Some(remaining) = frame_target.checked_sub(elapsed) {
                        thread::sleep(remaining);
                    }

                    {
                        let width = surface.width;
                        let height = surface.height;
                        let frame = surface.pixels.frame_mut();
                        let mut painter = FramePainter::new(frame, width, height);
                        scene.render(&mut painter);
                    }
                    if let Err(error) = surface.pixels.render() {
                        warn!(error = %error, "present_failed");
                        window_target.exit();
                    }
                    last_present_instant = Instant::now();
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            Event::LoopExiting => {
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}
