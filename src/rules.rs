/*
 * Behavior Rules Module
 *
 * This module defines the closed set of steering rules a flock evaluates
 * each simulation tick. Every rule carries a fixed weight and produces a
 * weighted velocity-delta vector from the evaluated agent and its peer
 * set (all other agents). Rules are configured once and shared read-only
 * across all ticks and agents.
 */

use nannou::prelude::*;

use crate::flock::{Agent, TickContext};
use crate::vecmath;

// The point an AttractToPoint rule pulls toward
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttractTarget {
    MapCenter,
    Pointer,
}

#[derive(Clone, Copy, Debug)]
pub enum BehaviorRule {
    // Pull toward the arithmetic-mean position of all peers
    Cohesion { weight: f32 },
    // Push away from every peer closer than the squared-distance threshold
    Separation { weight: f32, distance_sq: f32 },
    // Steer toward the average peer velocity
    VelocityMatching { weight: f32 },
    // Pull toward a designated point on the map
    AttractToPoint { weight: f32, target: AttractTarget },
    // Decay the agent's own velocity
    Damping { weight: f32 },
}

impl BehaviorRule {
    // Evaluate the rule for the agent at `index`. The peer set is every
    // other agent in `agents`, scanned linearly; the O(n) walk per agent
    // is deliberate for the flock sizes this simulation targets.
    pub fn apply(&self, index: usize, agents: &[Agent], ctx: &TickContext) -> Vec2 {
        let agent = &agents[index];
        match *self {
            BehaviorRule::Cohesion { weight } => {
                let mut sum = Vec2::ZERO;
                let mut count = 0;
                for (i, other) in agents.iter().enumerate() {
                    if i == index {
                        continue;
                    }
                    sum += other.position;
                    count += 1;
                }
                // A lone agent has no centroid to seek
                if count == 0 {
                    return Vec2::ZERO;
                }
                (sum / count as f32 - agent.position) * weight
            }
            BehaviorRule::Separation { weight, distance_sq } => {
                let mut push = Vec2::ZERO;
                for (i, other) in agents.iter().enumerate() {
                    if i == index {
                        continue;
                    }
                    // Strictly closer than the threshold; a peer exactly at
                    // the threshold does not contribute
                    if agent.position.distance_squared(other.position) < distance_sq {
                        push += agent.position - other.position;
                    }
                }
                push * weight
            }
            BehaviorRule::VelocityMatching { weight } => {
                let mut sum = Vec2::ZERO;
                let mut count = 0;
                for (i, other) in agents.iter().enumerate() {
                    if i == index {
                        continue;
                    }
                    sum += other.velocity;
                    count += 1;
                }
                if count == 0 {
                    return Vec2::ZERO;
                }
                (sum / count as f32 - agent.velocity) * weight
            }
            BehaviorRule::AttractToPoint { weight, target } => {
                let point = match target {
                    AttractTarget::MapCenter => ctx.map_size / 2.0,
                    // Before any pointer event arrives, fall back to the
                    // map center so the target is always defined
                    AttractTarget::Pointer => match ctx.pointer {
                        Some(p) => {
                            vecmath::clamp_to_bounds(p, ctx.map_size.x, ctx.map_size.y)
                        }
                        None => ctx.map_size / 2.0,
                    },
                };
                (point - agent.position) * weight
            }
            BehaviorRule::Damping { weight } => -agent.velocity * weight,
        }
    }

    pub fn weight(&self) -> f32 {
        match *self {
            BehaviorRule::Cohesion { weight }
            | BehaviorRule::Separation { weight, .. }
            | BehaviorRule::VelocityMatching { weight }
            | BehaviorRule::AttractToPoint { weight, .. }
            | BehaviorRule::Damping { weight } => weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vecmath::approx_eq;

    fn agent(id: u32, position: Vec2, velocity: Vec2) -> Agent {
        Agent {
            id,
            position,
            velocity,
        }
    }

    fn ctx() -> TickContext {
        TickContext {
            tick: 0,
            pointer: None,
            map_size: vec2(100.0, 80.0),
        }
    }

    #[test]
    fn cohesion_pulls_toward_peer_centroid() {
        let agents = vec![
            agent(0, vec2(0.0, 0.0), Vec2::ZERO),
            agent(1, vec2(10.0, 0.0), Vec2::ZERO),
            agent(2, vec2(0.0, 10.0), Vec2::ZERO),
        ];
        let rule = BehaviorRule::Cohesion { weight: 2.0 };
        // Peer centroid is (5, 5); pull is (centroid - self) * weight
        assert!(approx_eq(
            rule.apply(0, &agents, &ctx()),
            vec2(10.0, 10.0),
            1e-5
        ));
    }

    #[test]
    fn cohesion_and_velocity_matching_are_zero_without_peers() {
        let agents = vec![agent(0, vec2(3.0, 4.0), vec2(1.0, -1.0))];
        let c = ctx();
        assert_eq!(
            BehaviorRule::Cohesion { weight: 1.0 }.apply(0, &agents, &c),
            Vec2::ZERO
        );
        assert_eq!(
            BehaviorRule::VelocityMatching { weight: 1.0 }.apply(0, &agents, &c),
            Vec2::ZERO
        );
    }

    #[test]
    fn separation_threshold_is_strict() {
        // One peer sits exactly at the threshold distance (squared 9),
        // the other strictly inside; only the inside peer pushes
        let agents = vec![
            agent(0, vec2(0.0, 0.0), Vec2::ZERO),
            agent(1, vec2(3.0, 0.0), Vec2::ZERO),
            agent(2, vec2(0.0, 2.0), Vec2::ZERO),
        ];
        let rule = BehaviorRule::Separation {
            weight: 1.0,
            distance_sq: 9.0,
        };
        // Only the peer at (0,2) is strictly inside; push is self - peer
        assert!(approx_eq(rule.apply(0, &agents, &ctx()), vec2(0.0, -2.0), 1e-5));
    }

    #[test]
    fn separation_pushes_away_from_close_peers() {
        let agents = vec![
            agent(0, vec2(5.0, 5.0), Vec2::ZERO),
            agent(1, vec2(6.0, 5.0), Vec2::ZERO),
        ];
        let rule = BehaviorRule::Separation {
            weight: 1.5,
            distance_sq: 4.0,
        };
        // Push points from the peer toward self
        assert!(approx_eq(rule.apply(0, &agents, &ctx()), vec2(-1.5, 0.0), 1e-5));
    }

    #[test]
    fn velocity_matching_steers_toward_mean_peer_velocity() {
        let agents = vec![
            agent(0, Vec2::ZERO, vec2(1.0, 0.0)),
            agent(1, vec2(1.0, 0.0), vec2(3.0, 2.0)),
            agent(2, vec2(2.0, 0.0), vec2(1.0, 2.0)),
        ];
        let rule = BehaviorRule::VelocityMatching { weight: 0.5 };
        // Mean peer velocity (2, 2) minus own (1, 0), halved
        assert!(approx_eq(rule.apply(0, &agents, &ctx()), vec2(0.5, 1.0), 1e-5));
    }

    #[test]
    fn attract_clamps_pointer_into_map_bounds() {
        let agents = vec![agent(0, vec2(10.0, 10.0), Vec2::ZERO)];
        let mut c = ctx();
        c.pointer = Some(vec2(500.0, -20.0));
        let rule = BehaviorRule::AttractToPoint {
            weight: 1.0,
            target: AttractTarget::Pointer,
        };
        // Pointer clamps to (100, 0)
        assert!(approx_eq(rule.apply(0, &agents, &c), vec2(90.0, -10.0), 1e-5));
    }

    #[test]
    fn attract_falls_back_to_map_center_without_pointer() {
        let agents = vec![agent(0, vec2(10.0, 10.0), Vec2::ZERO)];
        let rule = BehaviorRule::AttractToPoint {
            weight: 1.0,
            target: AttractTarget::Pointer,
        };
        // Map is 100x80, center (50, 40)
        assert!(approx_eq(rule.apply(0, &agents, &ctx()), vec2(40.0, 30.0), 1e-5));
    }

    #[test]
    fn damping_negates_velocity() {
        let agents = vec![agent(0, Vec2::ZERO, vec2(4.0, -2.0))];
        let rule = BehaviorRule::Damping { weight: 0.25 };
        assert!(approx_eq(rule.apply(0, &agents, &ctx()), vec2(-1.0, 0.5), 1e-5));
    }
}
