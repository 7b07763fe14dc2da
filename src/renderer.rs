/*
 * Renderer Module
 *
 * This module implements the drawing surface on top of nannou's draw API
 * and provides the per-frame view function. The surface converts
 * map-local coordinates (top-left origin, y down, one unit per tile) to
 * nannou screen space (centered origin, y up) at the fixed pixel scale.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::surface::{DrawSurface, PixelBuffer};
use crate::ui;
use crate::PIXEL_SIZE;

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    window_rect: Rect,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, window_rect: Rect) -> Self {
        Self { draw, window_rect }
    }

    // Screen position of a map-local point
    fn to_screen(&self, point: Vec2) -> Vec2 {
        vec2(
            self.window_rect.left() + point.x * PIXEL_SIZE,
            self.window_rect.top() - point.y * PIXEL_SIZE,
        )
    }
}

impl DrawSurface for NannouSurface<'_> {
    fn put_pixel_buffer(&mut self, buffer: &PixelBuffer, origin: Vec2) {
        for y in 0..buffer.height {
            for x in 0..buffer.width {
                let color = match buffer.pixel(x, y) {
                    Some(c) => c,
                    None => continue,
                };
                // Center of the tile in map-local units
                let center = self.to_screen(origin + vec2(x as f32 + 0.5, y as f32 + 0.5));
                self.draw
                    .rect()
                    .x_y(center.x, center.y)
                    .w_h(PIXEL_SIZE, PIXEL_SIZE)
                    .color(color);
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], translate: Vec2, rotate: f32, color: Rgb<u8>) {
        // Flip the y axis of the shape and the rotation sign along with
        // the coordinate system
        let screen_points: Vec<Point2> = points
            .iter()
            .map(|p| pt2(p.x * PIXEL_SIZE, -p.y * PIXEL_SIZE))
            .collect();
        let position = self.to_screen(translate);

        self.draw
            .polygon()
            .color(color)
            .points(screen_points)
            .xy(pt2(position.x, position.y))
            .rotate(-rotate);
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let mut surface = NannouSurface::new(&draw, window_rect);

    // Map buffer first, flock on top
    model.coordinator.draw(&mut surface);

    // Draw debug info if enabled
    if model.params.show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            window_rect,
            model.coordinator.flock.agents.len(),
            model.coordinator.map.width,
            model.coordinator.map.height,
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
