use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::audio::Audio;
use crate::coords::Viewport;
use crate::core::{AppConfig, Ctx, Scene, SceneControl, SceneId};
use crate::device::Gpu;
use crate::error::SurfaceErrorAction;
use crate::input::platform::apply_window_event;
use crate::input::InputState;
use crate::render::{RenderCtx, RenderTarget, Renderer};
use crate::time::{FrameClock, Timestep};
use crate::window::{WindowCommand, WindowCommands};

/// Runtime entry point.
///
/// Owns the winit event loop and drives the active scene through the fixed
/// per-frame order: draw, present, process input, update steps, snapshot.
pub struct App;

impl App {
    /// Runs the event loop until a scene quits or the window closes.
    ///
    /// `scenes` is the complete scene list; `SceneId`s returned from
    /// [`SceneControl::Switch`] index into it.
    pub fn run(config: AppConfig, scenes: Vec<Box<dyn Scene>>, start: SceneId) -> Result<()> {
        anyhow::ensure!(!scenes.is_empty(), "scene list is empty");
        anyhow::ensure!(start.0 < scenes.len(), "start scene out of range");

        log::info!(
            "starting {:?} at {}x{} ({} scenes)",
            config.title,
            config.window_dims.0,
            config.window_dims.1,
            scenes.len()
        );

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, scenes, start);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

/// Resources that exist only once the window is up.
struct Running {
    window: Arc<Window>,
    gpu: Gpu,
    renderer: Renderer,
    viewport: Viewport,
}

struct RuntimeState {
    config: AppConfig,
    scenes: Vec<Box<dyn Scene>>,
    initialized: Vec<bool>,
    current: usize,
    entered: bool,

    running: Option<Running>,
    input: InputState,
    audio: Audio,
    commands: WindowCommands,
    clock: FrameClock,
    timestep: Timestep,
    exit_requested: bool,
}

impl RuntimeState {
    fn new(config: AppConfig, scenes: Vec<Box<dyn Scene>>, start: SceneId) -> Self {
        let initialized = vec![false; scenes.len()];
        let timestep = Timestep::new(config.target_ups, config.max_updates_per_frame);
        let mut audio = Audio::new();
        audio.set_volume(config.volume);

        Self {
            config,
            scenes,
            initialized,
            current: start.0,
            entered: false,
            running: None,
            input: InputState::default(),
            audio,
            commands: WindowCommands::default(),
            clock: FrameClock::new(),
            timestep,
            exit_requested: false,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (w, h) = self.config.window_dims;
        let mut attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(w as f64, h as f64));
        if self.config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let gpu = pollster::block_on(Gpu::new(window.clone()))?;
        let viewport = logical_viewport(&window);

        let rc = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), viewport);
        let mut renderer = Renderer::new(&rc).context("failed to build the default pipeline")?;
        renderer.set_clear_color(self.config.clear_color);

        self.running = Some(Running {
            window,
            gpu,
            renderer,
            viewport,
        });
        self.clock.reset();
        Ok(())
    }

    /// Runs `init` (once) and `enter` on the current scene.
    fn enter_current(&mut self) {
        let Some(run) = self.running.as_mut() else {
            return;
        };
        let mut ctx = Ctx::new(
            &mut run.renderer,
            &self.input,
            &mut self.audio,
            &mut self.commands,
            run.viewport,
            run.gpu.device(),
            run.gpu.queue(),
            run.gpu.surface_format(),
        );
        let scene = &mut self.scenes[self.current];
        if !self.initialized[self.current] {
            scene.init(&mut ctx);
            self.initialized[self.current] = true;
        }
        scene.enter(&mut ctx);
        self.entered = true;
    }

    fn leave_current(&mut self) {
        if !self.entered {
            return;
        }
        let Some(run) = self.running.as_mut() else {
            return;
        };
        let mut ctx = Ctx::new(
            &mut run.renderer,
            &self.input,
            &mut self.audio,
            &mut self.commands,
            run.viewport,
            run.gpu.device(),
            run.gpu.queue(),
            run.gpu.surface_format(),
        );
        self.scenes[self.current].leave(&mut ctx);
        self.entered = false;
    }

    fn handle_resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        let Some(run) = self.running.as_mut() else {
            return;
        };
        run.gpu.resize(new_size);
        let old = run.viewport;
        run.viewport = logical_viewport(&run.window);
        if run.viewport == old || !run.viewport.is_valid() {
            return;
        }

        log::debug!(
            "viewport {}x{} -> {}x{}",
            old.width,
            old.height,
            run.viewport.width,
            run.viewport.height
        );
        let mut ctx = Ctx::new(
            &mut run.renderer,
            &self.input,
            &mut self.audio,
            &mut self.commands,
            run.viewport,
            run.gpu.device(),
            run.gpu.queue(),
            run.gpu.surface_format(),
        );
        self.scenes[self.current].resize(&mut ctx, old);
    }

    /// Drives one full frame for the active scene.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let ft = self.clock.tick();

        let Some(run) = self.running.as_mut() else {
            return;
        };

        // Draw: queue quads, then record and present the pass.
        {
            let mut ctx = Ctx::new(
                &mut run.renderer,
                &self.input,
                &mut self.audio,
                &mut self.commands,
                run.viewport,
                run.gpu.device(),
                run.gpu.queue(),
                run.gpu.surface_format(),
            );
            ctx.renderer.begin();
            self.scenes[self.current].draw(&mut ctx);
        }

        match run.gpu.begin_frame() {
            Ok(mut frame) => {
                let rc = RenderCtx::new(
                    run.gpu.device(),
                    run.gpu.queue(),
                    run.gpu.surface_format(),
                    run.viewport,
                );
                let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
                run.renderer.end(&rc, &mut target);
                run.gpu.submit(frame);
            }
            Err(e) => match run.gpu.handle_surface_error(e) {
                SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {}
                SurfaceErrorAction::Fatal => {
                    log::error!("fatal surface error, shutting down");
                    self.exit_requested = true;
                }
            },
        }

        // Input, then the planned update steps.
        let control;
        {
            let mut ctx = Ctx::new(
                &mut run.renderer,
                &self.input,
                &mut self.audio,
                &mut self.commands,
                run.viewport,
                run.gpu.device(),
                run.gpu.queue(),
                run.gpu.surface_format(),
            );
            control = self.scenes[self.current].process_input(&mut ctx);

            let plan = self.timestep.plan(ft.dt);
            for _ in 0..plan.full_steps {
                ctx.renderer.update(plan.step_dt);
                self.scenes[self.current].update(&mut ctx, plan.step_dt);
            }
            ctx.renderer.update(plan.remainder_dt);
            self.scenes[self.current].update(&mut ctx, plan.remainder_dt);
        }

        self.input.snapshot();
        self.audio.update();

        match control {
            SceneControl::Continue => {}
            SceneControl::Quit => self.exit_requested = true,
            SceneControl::Switch(id) => {
                if id.0 < self.scenes.len() {
                    self.leave_current();
                    self.current = id.0;
                    self.enter_current();
                } else {
                    log::warn!("switch to unknown scene {id:?} ignored");
                }
            }
        }

        self.apply_commands();

        if self.exit_requested {
            self.leave_current();
            event_loop.exit();
            return;
        }

        if let Some(run) = self.running.as_ref() {
            run.window.request_redraw();
        }
    }

    fn apply_commands(&mut self) {
        let Some(run) = self.running.as_mut() else {
            return;
        };
        for cmd in self.commands.drain() {
            match cmd {
                WindowCommand::SetTitle(title) => run.window.set_title(&title),
                WindowCommand::SetDims(w, h) => {
                    let _ = run
                        .window
                        .request_inner_size(LogicalSize::new(w as f64, h as f64));
                }
                WindowCommand::SetFullscreen(on) => {
                    run.window
                        .set_fullscreen(on.then(|| Fullscreen::Borderless(None)));
                }
                WindowCommand::Exit => self.exit_requested = true,
            }
        }
    }
}

impl ApplicationHandler for RuntimeState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            self.clock.reset();
            return;
        }

        if let Err(e) = self.init_window(event_loop) {
            log::error!("initialization failed: {e:#}");
            event_loop.exit();
            return;
        }

        self.enter_current();
        if let Some(run) = self.running.as_ref() {
            run.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(run) = self.running.as_ref() {
            run.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested");
                self.leave_current();
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                self.handle_resize(*new_size);
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(run) = self.running.as_ref() {
                    let size = run.window.inner_size();
                    self.handle_resize(size);
                }
            }

            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }

            _ => {
                if let Some(run) = self.running.as_mut() {
                    apply_window_event(&run.window, &mut self.input, &event);
                }
            }
        }
    }
}

fn logical_viewport(window: &Window) -> Viewport {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Viewport::new(size.width as f32, size.height as f32)
}
