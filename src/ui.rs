/*
 * UI Module
 *
 * This module contains functions for creating and updating the user
 * interface using nannou_egui. It provides controls for adjusting rule
 * weights, flock size, map seeding, and the simulation cadence.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Actions requested through the UI this frame
#[derive(Default)]
pub struct UiActions {
    pub reset_agents: bool,
    pub regenerate_map: bool,
    pub rules_changed: bool,
    pub cadence_changed: bool,
}

// Update the UI and report what the user changed
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> UiActions {
    let mut actions = UiActions::default();

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.num_agents, SimulationParams::num_agents_range())
                        .text("Number of Boids"),
                );

                if ui.button("Reset Boids").clicked() {
                    actions.reset_agents = true;
                }
            });

            ui.collapsing("Behavior Rules", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.cohesion_weight, SimulationParams::weight_range())
                        .text("Cohesion Weight"),
                );
                ui.add(
                    egui::Slider::new(&mut params.separation_weight, SimulationParams::weight_range())
                        .text("Separation Weight"),
                );
                ui.add(
                    egui::Slider::new(&mut params.matching_weight, SimulationParams::weight_range())
                        .text("Velocity Matching Weight"),
                );
                ui.add(
                    egui::Slider::new(&mut params.attract_weight, SimulationParams::weight_range())
                        .text("Attraction Weight"),
                );
                ui.add(
                    egui::Slider::new(&mut params.damping_weight, SimulationParams::weight_range())
                        .text("Damping Weight"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.separation_distance,
                        SimulationParams::separation_distance_range(),
                    )
                    .text("Separation Distance"),
                );
                ui.checkbox(&mut params.follow_pointer, "Follow Pointer");
            });

            ui.collapsing("Terrain", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.seed_count, SimulationParams::seed_count_range())
                        .text("Biome Seeds"),
                );
                if ui.button("Regenerate Map").clicked() {
                    actions.regenerate_map = true;
                }
            });

            ui.collapsing("Cadence", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.tick_interval_ms,
                        SimulationParams::tick_interval_range(),
                    )
                    .text("Tick Interval (ms)"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.rule_interval,
                        SimulationParams::rule_interval_range(),
                    )
                    .text("Rule Evaluation Interval"),
                );

                ui.separator();
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!(
                    "Frame time: {:.2} ms",
                    debug_info.frame_time.as_secs_f64() * 1000.0
                ));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (num_agents_changed, rules_changed, cadence_changed) = params.detect_changes();
    actions.reset_agents |= num_agents_changed;
    actions.rules_changed = rules_changed;
    actions.cadence_changed = cadence_changed;

    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    agent_count: usize,
    map_width: i32,
    map_height: i32,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Ticks last frame: {}", debug_info.ticks_last_frame),
        format!("Boids: {}", agent_count),
        format!("Map: {}x{} tiles", map_width, map_height),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
