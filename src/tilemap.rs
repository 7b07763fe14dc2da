/*
 * Tile Map Module
 *
 * This module generates the two-biome terrain the flock drifts over.
 * Classification is a Voronoi-style nearest-seed assignment over a flat
 * grid, followed by a single edge-smoothing pass ("liminalize") that
 * marks tiles adjacent to the opposite biome so they render darker.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::error::MapError;
use crate::surface::PixelBuffer;

// Lightness points (on a 0-100 scale) removed per edge-factor level
const EDGE_DARKEN: u8 = 30;
const BASE_LIGHTNESS: u8 = 50;

// The two terrain classes a tile can belong to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Biome {
    Water,
    Meadow,
}

// A Voronoi generator point: an integer grid position with a biome label
#[derive(Clone, Copy, Debug)]
pub struct Seed {
    pub x: i32,
    pub y: i32,
    pub biome: Biome,
}

impl Seed {
    // Exact squared distance to a grid cell, in integer arithmetic so
    // the first-minimum tie-break is bit-exact
    fn distance_squared(&self, x: i32, y: i32) -> i64 {
        let dx = (self.x - x) as i64;
        let dy = (self.y - y) as i64;
        dx * dx + dy * dy
    }
}

// One grid cell of the generated map
#[derive(Clone, Copy, Debug)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub biome: Biome,
    // 0 = interior, 1 = touching the opposite biome, >1 reserved for
    // propagated levels from deeper smoothing passes
    pub edge_factor: u8,
}

#[derive(Debug)]
pub struct TileMap {
    pub width: i32,
    pub height: i32,
    pub seeds: Vec<Seed>,
    // Row-major, indexed y * width + x; exactly one tile per coordinate
    pub tiles: Vec<Tile>,
}

impl TileMap {
    // Generate a map by scattering `seed_count` random seeds and classifying
    // every cell by its nearest seed
    pub fn generate(
        width: i32,
        height: i32,
        seed_count: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidDimension { width, height });
        }
        if seed_count == 0 {
            return Err(MapError::InvalidSeedCount(seed_count));
        }

        // Seed positions may collide; ties are resolved deterministically
        // by seed order during classification
        let seeds = (0..seed_count)
            .map(|_| Seed {
                x: rng.gen_range(0..width),
                y: rng.gen_range(0..height),
                biome: if rng.gen_range(0..2) == 0 {
                    Biome::Water
                } else {
                    Biome::Meadow
                },
            })
            .collect();

        Self::from_seeds(width, height, seeds)
    }

    // Build a map from an explicit seed list (deterministic given the list)
    pub fn from_seeds(width: i32, height: i32, seeds: Vec<Seed>) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidDimension { width, height });
        }
        if seeds.is_empty() {
            return Err(MapError::InvalidSeedCount(0));
        }

        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile {
                    x,
                    y,
                    biome: nearest_biome(&seeds, x, y),
                    edge_factor: 0,
                });
            }
        }

        let mut map = Self {
            width,
            height,
            seeds,
            tiles,
        };
        map.liminalize();
        Ok(map)
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(&self.tiles[self.index(x, y)])
    }

    // Map midpoint in map-local units
    pub fn center(&self) -> Vec2 {
        vec2(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    // Edge-smoothing pass. For every tile, inspect the up-to-8 in-bounds
    // neighbors: a differing biome raises the pending edge factor to at
    // least 1, and a same-biome neighbor with an edge factor above 1
    // propagates it. All reads see pre-pass values and all writes land
    // after the pass, so neighbor order does not affect the result and
    // re-running on a smoothed map reproduces identical factors.
    pub fn liminalize(&mut self) {
        let mut pending = vec![0u8; self.tiles.len()];

        for y in 0..self.height {
            for x in 0..self.width {
                let tile = &self.tiles[self.index(x, y)];
                let mut factor = 0u8;

                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        // Cells outside the map are skipped, not wrapped
                        let neighbor = match self.tile(x + dx, y + dy) {
                            Some(n) => n,
                            None => continue,
                        };
                        if neighbor.biome != tile.biome {
                            factor = factor.max(1);
                        } else if neighbor.edge_factor > 1 {
                            factor = factor.max(neighbor.edge_factor);
                        }
                    }
                }

                pending[self.index(x, y)] = factor;
            }
        }

        for (tile, factor) in self.tiles.iter_mut().zip(pending) {
            tile.edge_factor = factor;
        }
    }

    // The tile's display color: the biome's pure base hue, darkened by
    // EDGE_DARKEN lightness points per edge-factor level
    pub fn tile_color(tile: &Tile) -> Rgb<u8> {
        let lightness = BASE_LIGHTNESS.saturating_sub(EDGE_DARKEN.saturating_mul(tile.edge_factor));
        // Pure hue at full saturation with lightness <= 50: the HSL to RGB
        // conversion reduces to 2 * lightness on the active channel
        let channel = ((lightness as f32 / 100.0) * 2.0 * 255.0).round() as u8;
        match tile.biome {
            Biome::Water => rgb(0, 0, channel),
            Biome::Meadow => rgb(0, channel, 0),
        }
    }

    // Render the whole map to a pixel buffer, one pixel per tile
    pub fn render(&self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.tiles.iter().map(Self::tile_color).collect(),
        }
    }
}

// The biome of the first seed (in list order) at minimal squared distance
fn nearest_biome(seeds: &[Seed], x: i32, y: i32) -> Biome {
    let mut best = &seeds[0];
    let mut best_distance = best.distance_squared(x, y);
    for seed in &seeds[1..] {
        let d = seed.distance_squared(x, y);
        if d < best_distance {
            best = seed;
            best_distance = d;
        }
    }
    best.biome
}
