/*
 * Flock Module
 *
 * This module defines the agents and the flock simulator that advances
 * them. Each tick the simulator evaluates the configured behavior rules
 * against every agent and its peer set, accumulates the weighted results
 * into the agent's velocity, and integrates the position. Rendering is a
 * pure read that emits one triangle per agent through the draw surface.
 */

use log::warn;
use nannou::prelude::*;
use rand::Rng;

use crate::rules::BehaviorRule;
use crate::surface::DrawSurface;
use crate::vecmath;
use crate::BOID_SIZE;

// An autonomous flock member. Positions are continuous map-local
// coordinates, not grid-snapped.
#[derive(Clone, Copy, Debug)]
pub struct Agent {
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
}

// Per-tick state threaded explicitly through step and rule evaluation:
// the tick counter, the last-known map-local pointer position, and the
// map bounds. No ambient globals.
#[derive(Clone, Copy, Debug)]
pub struct TickContext {
    pub tick: u64,
    pub pointer: Option<Vec2>,
    pub map_size: Vec2,
}

pub struct FlockSimulator {
    pub agents: Vec<Agent>,
    pub rules: Vec<BehaviorRule>,
    // Rules are evaluated every `rule_interval`-th tick; positions advance
    // by velocity / rule_interval every tick so average speed is preserved.
    // An interval of 1 is the unthrottled design.
    pub rule_interval: u32,
}

impl FlockSimulator {
    // Create a flock of `count` agents at random positions inside the map,
    // all starting at rest
    pub fn new(
        count: usize,
        map_width: f32,
        map_height: f32,
        rules: Vec<BehaviorRule>,
        rule_interval: u32,
        rng: &mut impl Rng,
    ) -> Self {
        let agents = (0..count)
            .map(|id| Agent {
                id: id as u32,
                position: vecmath::random_point(rng, map_width, map_height),
                velocity: Vec2::ZERO,
            })
            .collect();

        Self {
            agents,
            rules,
            rule_interval: rule_interval.max(1),
        }
    }

    // Advance the flock by one simulation tick. Every agent's velocity and
    // position are mutated exactly once per call.
    pub fn step(&mut self, ctx: &TickContext) {
        let evaluate_rules = ctx.tick % self.rule_interval as u64 == 0;

        if evaluate_rules && !self.rules.is_empty() {
            // Rules read a pre-tick snapshot so evaluation order between
            // agents does not change the outcome
            let snapshot = self.agents.clone();
            for (i, agent) in self.agents.iter_mut().enumerate() {
                let mut delta = Vec2::ZERO;
                for rule in &self.rules {
                    delta += rule.apply(i, &snapshot, ctx);
                }
                agent.velocity += delta;
            }
        }

        let scale = 1.0 / self.rule_interval as f32;
        for agent in &mut self.agents {
            agent.position += agent.velocity * scale;
            recover_non_finite(agent, ctx);
        }
    }

    // Clamp every agent into the new map bounds after a resize
    pub fn resize(&mut self, map_width: f32, map_height: f32) {
        for agent in &mut self.agents {
            agent.position = vecmath::clamp_to_bounds(agent.position, map_width, map_height);
        }
    }

    pub fn set_rules(&mut self, rules: Vec<BehaviorRule>) {
        self.rules = rules;
    }

    // Re-scatter the flock at a new population size, all agents at rest
    pub fn reset(&mut self, count: usize, map_width: f32, map_height: f32, rng: &mut impl Rng) {
        self.agents.clear();
        for id in 0..count {
            self.agents.push(Agent {
                id: id as u32,
                position: vecmath::random_point(rng, map_width, map_height),
                velocity: Vec2::ZERO,
            });
        }
    }

    // Emit one triangle per agent, rotated to its heading. Never mutates
    // simulation state.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let points = [
            vec2(BOID_SIZE, 0.0),
            vec2(-BOID_SIZE, BOID_SIZE / 2.0),
            vec2(-BOID_SIZE, -BOID_SIZE / 2.0),
        ];

        let color = rgb(230, 230, 210);
        for agent in &self.agents {
            let heading = agent.velocity.y.atan2(agent.velocity.x);
            surface.fill_polygon(&points, agent.position, heading, color);
        }
    }
}

// A single bad tick must not halt the loop: a non-finite velocity resets
// to rest and a non-finite position returns to the map center, both
// reported through the logger.
fn recover_non_finite(agent: &mut Agent, ctx: &TickContext) {
    if !vecmath::is_finite(agent.velocity) {
        warn!(
            "agent {} velocity became non-finite ({:?}); resetting to zero",
            agent.id, agent.velocity
        );
        agent.velocity = Vec2::ZERO;
    }
    if !vecmath::is_finite(agent.position) {
        warn!(
            "agent {} position became non-finite ({:?}); recentering",
            agent.id, agent.position
        );
        agent.position = ctx.map_size / 2.0;
    }
}
