/*
 * Render Coordinator Module
 *
 * This module ties the tile map and the flock to the host's two cadences:
 * a continuous per-frame redraw and a fixed-interval simulation tick.
 * The coordinator owns the map, the cached map pixel buffer, the flock,
 * the tick context, and the RNG; it holds no simulation logic itself.
 * Redraw only reads state, the tick path is the only place state mutates.
 */

use std::time::Duration;

use log::info;
use nannou::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::MapError;
use crate::flock::{FlockSimulator, TickContext};
use crate::params::SimulationParams;
use crate::surface::{DrawSurface, PixelBuffer};
use crate::tilemap::TileMap;
use crate::vecmath;
use crate::PIXEL_SIZE;

pub struct RenderCoordinator {
    pub map: TileMap,
    pub flock: FlockSimulator,
    pub ctx: TickContext,
    // Map pixel buffer, recomputed only when the map changes
    buffer: PixelBuffer,
    tick_interval: Duration,
    accumulator: Duration,
    rng: ChaCha8Rng,
}

// Map dimension covering a viewport dimension at the fixed pixel scale
fn map_dimension(viewport: f32) -> i32 {
    ((viewport / PIXEL_SIZE).ceil() as i32).max(1)
}

impl RenderCoordinator {
    pub fn new(
        viewport_width: f32,
        viewport_height: f32,
        params: &SimulationParams,
    ) -> Result<Self, MapError> {
        let mut rng = match params.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let width = map_dimension(viewport_width);
        let height = map_dimension(viewport_height);
        let map = TileMap::generate(width, height, params.seed_count, &mut rng)?;
        let buffer = map.render();

        let flock = FlockSimulator::new(
            params.num_agents,
            width as f32,
            height as f32,
            params.build_rules(),
            params.rule_interval,
            &mut rng,
        );

        info!(
            "generated {}x{} map with {} seeds and {} agents",
            width, height, params.seed_count, params.num_agents
        );

        Ok(Self {
            map,
            flock,
            ctx: TickContext {
                tick: 0,
                pointer: None,
                map_size: vec2(width as f32, height as f32),
            },
            buffer,
            tick_interval: Duration::from_millis(params.tick_interval_ms),
            accumulator: Duration::ZERO,
            rng,
        })
    }

    // Accumulate elapsed wall-clock time and run one complete simulation
    // step per whole tick interval. Returns the number of ticks executed.
    // While paused the accumulator is drained so resuming does not replay
    // a burst of ticks.
    pub fn advance(&mut self, elapsed: Duration, paused: bool) -> u32 {
        if paused {
            self.accumulator = Duration::ZERO;
            return 0;
        }

        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.tick_interval {
            self.flock.step(&self.ctx);
            self.ctx.tick += 1;
            self.accumulator -= self.tick_interval;
            ticks += 1;
        }
        ticks
    }

    // Read-only frame draw: the cached map buffer, then the flock
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.put_pixel_buffer(&self.buffer, Vec2::ZERO);
        self.flock.render(surface);
    }

    // Record the latest pointer position, already in map-local units
    pub fn set_pointer(&mut self, map_local: Vec2) {
        self.ctx.pointer = Some(vecmath::clamp_to_bounds(
            map_local,
            self.ctx.map_size.x,
            self.ctx.map_size.y,
        ));
    }

    // Regenerate the map for a new viewport and clamp the flock into the
    // new bounds
    pub fn handle_resize(
        &mut self,
        viewport_width: f32,
        viewport_height: f32,
        seed_count: usize,
    ) -> Result<(), MapError> {
        let width = map_dimension(viewport_width);
        let height = map_dimension(viewport_height);
        if width == self.map.width && height == self.map.height {
            return Ok(());
        }

        info!(
            "viewport resized; regenerating map at {}x{} tiles",
            width, height
        );
        self.map = TileMap::generate(width, height, seed_count, &mut self.rng)?;
        self.buffer = self.map.render();
        self.ctx.map_size = vec2(width as f32, height as f32);
        self.flock.resize(width as f32, height as f32);
        Ok(())
    }

    // Regenerate the map in place at the current dimensions
    pub fn regenerate(&mut self, seed_count: usize) -> Result<(), MapError> {
        self.map = TileMap::generate(self.map.width, self.map.height, seed_count, &mut self.rng)?;
        self.buffer = self.map.render();
        Ok(())
    }

    // Re-scatter the flock at a new population size
    pub fn reset_agents(&mut self, count: usize) {
        let size = self.ctx.map_size;
        self.flock.reset(count, size.x, size.y, &mut self.rng);
    }

    pub fn set_rules(&mut self, params: &SimulationParams) {
        self.flock.set_rules(params.build_rules());
        self.flock.rule_interval = params.rule_interval.max(1);
    }

    pub fn set_tick_interval(&mut self, interval_ms: u64) {
        self.tick_interval = Duration::from_millis(interval_ms.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn params() -> SimulationParams {
        let mut params = SimulationParams::default();
        params.rng_seed = Some(1234);
        params
    }

    // An 800x600 viewport at PIXEL_SIZE 8 is a 100x75 map
    fn coordinator() -> RenderCoordinator {
        RenderCoordinator::new(800.0, 600.0, &params()).unwrap()
    }

    #[test]
    fn viewport_maps_to_ceil_of_scaled_dimension() {
        assert_eq!(map_dimension(800.0), 100);
        assert_eq!(map_dimension(801.0), 101);
        assert_eq!(map_dimension(0.0), 1);
    }

    #[test]
    fn advance_runs_one_step_per_whole_interval() {
        let mut coord = coordinator();
        // Default tick interval is 16ms; 50ms holds three whole ticks
        let ticks = coord.advance(Duration::from_millis(50), false);
        assert_eq!(ticks, 3);
        assert_eq!(coord.ctx.tick, 3);

        // 2ms of remainder plus 10ms is still short of a tick
        assert_eq!(coord.advance(Duration::from_millis(10), false), 0);
        assert_eq!(coord.ctx.tick, 3);
    }

    #[test]
    fn pause_drains_the_accumulator() {
        let mut coord = coordinator();
        assert_eq!(coord.advance(Duration::from_millis(500), true), 0);
        assert_eq!(coord.ctx.tick, 0);
        // Resuming does not replay the paused time
        assert_eq!(coord.advance(Duration::from_millis(16), false), 1);
    }

    #[test]
    fn draw_blits_the_map_once_and_each_agent_once() {
        let coord = coordinator();
        let mut surface = RecordingSurface::default();
        coord.draw(&mut surface);
        assert_eq!(surface.blits.len(), 1);
        assert_eq!(surface.blits[0], (100, 75, Vec2::ZERO));
        assert_eq!(surface.polygons.len(), coord.flock.agents.len());
    }

    #[test]
    fn pointer_is_clamped_to_map_bounds() {
        let mut coord = coordinator();
        coord.set_pointer(vec2(-5.0, 1000.0));
        assert_eq!(coord.ctx.pointer, Some(vec2(0.0, 75.0)));
    }

    #[test]
    fn resize_regenerates_map_and_clamps_agents() {
        let mut coord = coordinator();
        coord.handle_resize(400.0, 240.0, 10).unwrap();
        assert_eq!(coord.map.width, 50);
        assert_eq!(coord.map.height, 30);
        assert_eq!(coord.ctx.map_size, vec2(50.0, 30.0));
        for agent in &coord.flock.agents {
            assert!(agent.position.x <= 50.0 && agent.position.y <= 30.0);
        }
    }

    #[test]
    fn identical_seeds_produce_identical_maps() {
        let a = coordinator();
        let b = coordinator();
        let (pa, pb) = (a.map.render().pixels, b.map.render().pixels);
        assert_eq!(pa.len(), pb.len());
        assert!(pa.iter().zip(&pb).all(|(x, y)| x == y));
    }
}
