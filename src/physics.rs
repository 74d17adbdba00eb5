/*
 * Physics Module
 *
 * This module handles the per-step physics for the boid flocking behavior.
 * It contains functions for updating agent velocities and positions by
 * applying the flocking rules: cohesion, separation and alignment, plus
 * the spherical border correction.
 *
 * Kept fast despite the brute-force O(n²) neighbor scan by:
 * - Computing the position and velocity sums once per step, not per agent
 * - Deriving each agent's "all others" terms from those shared sums
 * - Reading every rule input from a pre-step snapshot, so the loop body
 *   stays free of ordering hazards
 */

use glam::{Mat3, Quat, Vec3};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::SimulationConfig;
use crate::flock::FlockSimulator;
use crate::COHESION_DIVISOR;

// Minimum squared length accepted before normalizing a raw direction
const DIRECTION_EPSILON: f32 = 1e-4;

// Advance every agent by one step of duration delta_time
pub fn step_flock(flock: &mut FlockSimulator, delta_time: f32) {
    // Rules read from a pre-step snapshot so no agent ever sees another
    // agent's already-updated state, whatever the iteration order
    let prev_positions = flock.positions.clone();
    let prev_velocities = flock.velocities.clone();

    let agent_count = prev_positions.len();
    let position_sum: Vec3 = prev_positions.iter().sum();
    let velocity_sum: Vec3 = prev_velocities.iter().sum();

    for i in 0..agent_count {
        let position = prev_positions[i];
        let velocity = prev_velocities[i];

        let cohesion = cohesion_rule(position, position_sum, agent_count);
        let correction = separation_or_boundary(position, &prev_positions, &flock.config);
        let alignment = alignment_rule(velocity, velocity_sum, agent_count, flock.config.alignment_gain);

        let next_velocity = limit_speed(velocity + cohesion + correction + alignment, flock.config.max_speed);

        flock.velocities[i] = next_velocity;
        flock.positions[i] = position + next_velocity * delta_time;
    }
}

// Rule 1: steer a damped fraction of the way toward the centre of mass of
// every other agent, derived from the shared position sum
fn cohesion_rule(position: Vec3, position_sum: Vec3, agent_count: usize) -> Vec3 {
    let others_centroid = (position_sum - position) / (agent_count as f32 - 1.0);
    (others_centroid - position) / COHESION_DIVISOR
}

// Rule 2: push away from every neighbor closer than neighbor_radius.
// An agent that has left the boundary sphere gets pulled back toward the
// centre instead, and the pull replaces local separation entirely for
// that step.
fn separation_or_boundary(position: Vec3, positions: &[Vec3], config: &SimulationConfig) -> Vec3 {
    if config.use_boundary {
        let to_center = config.boundary_center - position;
        let distance = to_center.length();
        if distance >= config.boundary_radius {
            return to_center.normalize_or_zero() * (distance - config.boundary_radius);
        }
    }

    let mut displacement = Vec3::ZERO;
    for &other in positions {
        // Coincident agents are skipped, there is no direction to push along
        if other != position && position.distance(other) < config.neighbor_radius {
            displacement += position - other;
        }
    }
    displacement
}

// Rule 3: match a fraction of the mean velocity of every other agent
fn alignment_rule(velocity: Vec3, velocity_sum: Vec3, agent_count: usize, gain: f32) -> Vec3 {
    (velocity_sum - velocity) / (agent_count as f32 - 1.0) * gain
}

// Rescale to exactly max_speed when the combined rules push past it
fn limit_speed(velocity: Vec3, max_speed: f32) -> Vec3 {
    if velocity.length() > max_speed {
        velocity.normalize() * max_speed
    } else {
        velocity
    }
}

// Sample a position inside the spawn sphere: a uniform random direction
// scaled by a uniform fraction of the radius
pub fn random_spawn_position(rng: &mut SmallRng, center: Vec3, radius: f32) -> Vec3 {
    let direction = loop {
        let raw = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        // Resample near-zero vectors instead of normalizing them into NaN
        if raw.length_squared() > DIRECTION_EPSILON {
            break raw.normalize();
        }
    };
    center + direction * radius * rng.gen::<f32>()
}

// Orientation facing along the given direction with +Y as the up hint,
// the look-at from an agent's previous position to its next one.
// Returns identity for a zero direction instead of producing NaN.
pub fn look_rotation(direction: Vec3) -> Quat {
    let forward = direction.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let mut right = Vec3::Y.cross(forward);
    if right.length_squared() < DIRECTION_EPSILON {
        // Looking straight up or down, fall back to a fixed right axis
        right = Vec3::X;
    } else {
        right = right.normalize();
    }
    let up = forward.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}
