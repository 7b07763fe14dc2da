/*
 * Biome Boids - Module Definitions
 *
 * This file defines the module structure for the biome boids application.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use coordinator::RenderCoordinator;
pub use error::MapError;
pub use flock::{Agent, FlockSimulator, TickContext};
pub use params::SimulationParams;
pub use rules::{AttractTarget, BehaviorRule};
pub use surface::{DrawSurface, PixelBuffer};
pub use tilemap::{Biome, Seed, Tile, TileMap};

// Define modules
pub mod app;
pub mod coordinator;
pub mod debug;
pub mod error;
pub mod flock;
pub mod params;
pub mod renderer;
pub mod rules;
pub mod surface;
pub mod tilemap;
pub mod ui;
pub mod vecmath;

// Constants
// Side length of one map tile on screen, in physical pixels.
pub const PIXEL_SIZE: f32 = 8.0;
// Boid triangle half-length, in map-local units.
pub const BOID_SIZE: f32 = 1.2;
