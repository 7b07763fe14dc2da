/*
 * Application Module
 *
 * This module defines the main application model and logic. It wires the
 * render coordinator to nannou's window: the update callback drives the
 * fixed-interval simulation cadence, the view callback redraws every
 * frame, and the input handlers feed pointer position and viewport size
 * into the coordinator.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use log::error;

use crate::coordinator::RenderCoordinator;
use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::renderer;
use crate::ui;
use crate::PIXEL_SIZE;

// Main model for the application
pub struct Model {
    pub coordinator: RenderCoordinator,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window
    let window_id = app
        .new_window()
        .title("Biome Boids")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(mouse_moved)
        .resized(resized)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    let params = SimulationParams::default();

    // Map generation failures here are unrecoverable startup errors
    let coordinator = RenderCoordinator::new(window_width, window_height, &params)
        .expect("Failed to generate the initial tile map");

    Model {
        coordinator,
        params,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and apply what the user changed
    let actions = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if actions.reset_agents {
        model.coordinator.reset_agents(model.params.num_agents);
    }
    if actions.regenerate_map {
        if let Err(e) = model.coordinator.regenerate(model.params.seed_count) {
            error!("map regeneration failed: {e}");
        }
    }
    if actions.rules_changed || actions.cadence_changed {
        model.coordinator.set_rules(&model.params);
        model
            .coordinator
            .set_tick_interval(model.params.tick_interval_ms);
    }

    // Advance the simulation on its fixed tick cadence
    let ticks = model
        .coordinator
        .advance(update.since_last, model.params.pause_simulation);
    model.debug_info.ticks_last_frame = ticks;
}

// Mouse moved event handler: convert the pointer from screen space to
// map-local units
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let window_rect = app.window_rect();
    // Screen pixels measured from the top-left window corner, y down
    let screen = vec2(pos.x - window_rect.left(), window_rect.top() - pos.y);
    model.coordinator.set_pointer(screen / PIXEL_SIZE);
}

// Window resized event handler: regenerate the map to cover the new
// viewport and keep the flock inside it
pub fn resized(_app: &App, model: &mut Model, dims: Vec2) {
    if let Err(e) = model
        .coordinator
        .handle_resize(dims.x, dims.y, model.params.seed_count)
    {
        error!("resize handling failed: {e}");
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
