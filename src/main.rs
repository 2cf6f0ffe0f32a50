// src/main.rs
use nannou::prelude::*;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stepbar::{config::Config, render::Renderer, views::GroupUpdate};

struct Model {
    renderer: Renderer,

    // Frame timing
    last_update: Instant,

    // Overlay
    debug_flag: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stepbar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "using default config");
        Config::default()
    });

    let renderer = Renderer::new(&config).expect("Failed to build renderer from config");

    // Create window
    let mut window = app
        .new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed);
    if config.window.fullscreen {
        window = window.fullscreen();
    }
    window.build().expect("Failed to build window");

    // Idle until the first tap
    app.set_loop_mode(LoopMode::Wait);
    info!("tap or press space to animate");

    Model {
        renderer,
        last_update: Instant::now(),
        debug_flag: false,
    }
}

fn handle_tap(app: &App, model: &mut Model) {
    if model.renderer.handle_tap() {
        model.last_update = Instant::now();
        app.set_loop_mode(LoopMode::RefreshSync);
    }
}

fn mouse_pressed(app: &App, model: &mut Model, _button: MouseButton) {
    handle_tap(app, model);
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => handle_tap(app, model),
        Key::D => model.debug_flag = !model.debug_flag,
        Key::Q => app.quit(),
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;

    if let Some(GroupUpdate::Stepped {
        index,
        value,
        active,
        reversed,
    }) = model.renderer.update(duration)
    {
        info!(index, value, active, reversed, "step complete");
    }

    // Stop redrawing once the timer has stopped
    if !model.renderer.is_animating() {
        app.set_loop_mode(LoopMode::Wait);
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let bounds = app.window_rect();

    model.renderer.render(&draw, bounds);

    if model.debug_flag {
        draw.text(&model.renderer.debug_text())
            .x_y(bounds.left() + 160.0, bounds.top() - 80.0)
            .w_h(300.0, 140.0)
            .left_justify()
            .align_text_top()
            .color(BLACK);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        warn!(error = ?e, "failed to render frame");
    }
}
