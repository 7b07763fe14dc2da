/*
 * Biome Boids
 *
 * An interactive visualization: a Voronoi-style two-biome tile map with
 * a flock of boids drifting over it. Boids follow weighted behavior
 * rules (cohesion, separation, velocity matching, attraction, damping)
 * that can be tuned live through the control window; the map regenerates
 * on window resize and on demand.
 */

use biome_boids::app;

fn main() {
    env_logger::init();

    nannou::app(app::model).update(app::update).run();
}
