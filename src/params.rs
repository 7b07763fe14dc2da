/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the biome boids simulation. These parameters
 * can be modified through the UI. It also provides methods for parameter
 * change detection so the app knows when to rebuild rules or reset the
 * flock.
 */

use crate::rules::{AttractTarget, BehaviorRule};

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_agents: usize,
    pub seed_count: usize,
    pub cohesion_weight: f32,
    pub separation_weight: f32,
    pub matching_weight: f32,
    pub attract_weight: f32,
    pub damping_weight: f32,
    // Separation threshold in map-local units (squared before use)
    pub separation_distance: f32,
    // Pull toward the pointer instead of the map center
    pub follow_pointer: bool,
    // Fixed simulation tick interval, milliseconds
    pub tick_interval_ms: u64,
    // Rules are evaluated every Nth tick
    pub rule_interval: u32,
    // Fixed RNG seed for reproducible runs; None draws from entropy
    pub rng_seed: Option<u64>,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_agents: usize,
    seed_count: usize,
    cohesion_weight: f32,
    separation_weight: f32,
    matching_weight: f32,
    attract_weight: f32,
    damping_weight: f32,
    separation_distance: f32,
    follow_pointer: bool,
    tick_interval_ms: u64,
    rule_interval: u32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_agents: 60,
            seed_count: 24,
            cohesion_weight: 0.002,
            separation_weight: 0.05,
            matching_weight: 0.05,
            attract_weight: 0.001,
            damping_weight: 0.02,
            separation_distance: 4.0,
            follow_pointer: true,
            tick_interval_ms: 16,
            rule_interval: 1,
            rng_seed: None,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Build the shared rule set from the current weights. Rules with a
    // zero weight are dropped entirely.
    pub fn build_rules(&self) -> Vec<BehaviorRule> {
        let target = if self.follow_pointer {
            AttractTarget::Pointer
        } else {
            AttractTarget::MapCenter
        };
        let all = [
            BehaviorRule::Cohesion {
                weight: self.cohesion_weight,
            },
            BehaviorRule::Separation {
                weight: self.separation_weight,
                distance_sq: self.separation_distance * self.separation_distance,
            },
            BehaviorRule::VelocityMatching {
                weight: self.matching_weight,
            },
            BehaviorRule::AttractToPoint {
                weight: self.attract_weight,
                target,
            },
            BehaviorRule::Damping {
                weight: self.damping_weight,
            },
        ];
        all.into_iter().filter(|r| r.weight() > 0.0).collect()
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_agents: self.num_agents,
            seed_count: self.seed_count,
            cohesion_weight: self.cohesion_weight,
            separation_weight: self.separation_weight,
            matching_weight: self.matching_weight,
            attract_weight: self.attract_weight,
            damping_weight: self.damping_weight,
            separation_distance: self.separation_distance,
            follow_pointer: self.follow_pointer,
            tick_interval_ms: self.tick_interval_ms,
            rule_interval: self.rule_interval,
        });
    }

    // Check what changed since the last snapshot.
    // Returns (num_agents_changed, rules_changed, cadence_changed).
    pub fn detect_changes(&self) -> (bool, bool, bool) {
        let prev = match &self.previous_values {
            Some(prev) => prev,
            None => return (false, false, false),
        };

        let num_agents_changed = self.num_agents != prev.num_agents;
        let rules_changed = self.cohesion_weight != prev.cohesion_weight
            || self.separation_weight != prev.separation_weight
            || self.matching_weight != prev.matching_weight
            || self.attract_weight != prev.attract_weight
            || self.damping_weight != prev.damping_weight
            || self.separation_distance != prev.separation_distance
            || self.follow_pointer != prev.follow_pointer;
        let cadence_changed = self.tick_interval_ms != prev.tick_interval_ms
            || self.rule_interval != prev.rule_interval;

        (num_agents_changed, rules_changed, cadence_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn num_agents_range() -> std::ops::RangeInclusive<usize> {
        1..=500
    }

    pub fn seed_count_range() -> std::ops::RangeInclusive<usize> {
        1..=200
    }

    pub fn weight_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.2
    }

    pub fn separation_distance_range() -> std::ops::RangeInclusive<f32> {
        0.5..=20.0
    }

    pub fn tick_interval_range() -> std::ops::RangeInclusive<u64> {
        8..=200
    }

    pub fn rule_interval_range() -> std::ops::RangeInclusive<u32> {
        1..=10
    }
}
