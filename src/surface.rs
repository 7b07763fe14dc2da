/*
 * Surface Module
 *
 * This module defines the narrow drawing interface the simulation core
 * talks to. A surface accepts exactly two primitives: a full pixel
 * buffer blit and a transformed filled polygon. All coordinates handed
 * to a surface are map-local units; the concrete backend applies the
 * screen scale and orientation.
 */

use nannou::prelude::*;

// A row-major pixel image, one pixel per map tile
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pub width: i32,
    pub height: i32,
    pub pixels: Vec<Rgb<u8>>,
}

impl PixelBuffer {
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb<u8>> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }
}

// The drawing collaborator the core renders through
pub trait DrawSurface {
    // Blit a pixel buffer with its top-left corner at `origin`
    fn put_pixel_buffer(&mut self, buffer: &PixelBuffer, origin: Vec2);

    // Draw a filled polygon: `points` describe the shape around its own
    // origin, then it is rotated by `rotate` radians and translated
    fn fill_polygon(&mut self, points: &[Vec2], translate: Vec2, rotate: f32, color: Rgb<u8>);
}

// Records draw calls instead of rasterizing, for tests
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
    pub blits: Vec<(i32, i32, Vec2)>,
    pub polygons: Vec<(Vec2, f32, Rgb<u8>)>,
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
    fn put_pixel_buffer(&mut self, buffer: &PixelBuffer, origin: Vec2) {
        self.blits.push((buffer.width, buffer.height, origin));
    }

    fn fill_polygon(&mut self, _points: &[Vec2], translate: Vec2, rotate: f32, color: Rgb<u8>) {
        self.polygons.push((translate, rotate, color));
    }
}
