mod canvas;
mod config;
mod editor;
mod frame_clock;
mod game_state;
mod ghost;
mod graphics;
mod grid;
mod input;
mod simulation;

use std::process::ExitCode;
use std::time::Instant;

use thiserror::Error;
use winit::{
    dpi::PhysicalSize,
    event::Event,
    event_loop::{ControlFlow, EventLoop},
    window::{CursorIcon, WindowBuilder},
};

use crate::canvas::Canvas;
use crate::config::{Config, ConfigError, Startup};
use crate::frame_clock::FrameClock;
use crate::graphics::GraphicsRenderer;
use crate::input::InputHandler;
use crate::simulation::Simulation;

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Unable to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Unable to create renderer: {0}")]
    Surface(#[from] pixels::Error),
}

fn main() -> ExitCode {
    env_logger::init();

    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn start() -> Result<(), AppError> {
    match Config::parse_from(std::env::args_os())? {
        Startup::Help => {
            print!("{}", config::usage());
            Ok(())
        }
        Startup::Run(config) => run(config),
    }
}

fn run(config: Config) -> Result<(), AppError> {
    log::info!(
        "Starting {}x{} grid at scale {} with {:?} frame delay",
        config.width,
        config.height,
        config.scale,
        config.delay
    );

    let (surface_width, surface_height) = config.surface_size();
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Game of Life")
        .with_inner_size(PhysicalSize::new(surface_width, surface_height))
        .with_resizable(false)
        .build(&event_loop)
        .map_err(|err| {
            log::error!("Window creation failed: {}", err);
            err
        })?;
    window.set_cursor_icon(CursorIcon::Crosshair);

    let mut graphics = GraphicsRenderer::new(&window, config.width, config.height, config.scale)
        .map_err(|err| {
            log::error!("Renderer creation failed: {}", err);
            err
        })?;
    let mut input = InputHandler::new(config.scale, config.width, config.height);
    let mut simulation = Simulation::new(config.width, config.height, config.palette);
    let mut clock = FrameClock::new(config.delay, Instant::now());

    graphics.redraw(simulation.grid(), simulation.palette());

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => {
            if let Some(input_event) = input.handle_window_event(&event) {
                simulation.handle_event(input_event, &mut graphics);
            }
        }
        Event::MainEventsCleared => {
            if simulation.is_quit() {
                log::info!("Shutting down");
                *control_flow = ControlFlow::Exit;
                return;
            }

            if clock.tick(Instant::now()) {
                simulation.frame(input.pointer(), &mut graphics);

                if let Err(err) = graphics.present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            *control_flow = ControlFlow::WaitUntil(clock.deadline());
        }
        _ => {}
    })
}
