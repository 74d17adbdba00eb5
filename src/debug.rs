/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct with the flock-level summary
 * values a host can draw as a debug overlay: the centre of mass of the
 * flock and the summed velocity of every agent. Reading these never
 * affects the simulation state.
 */

use glam::Vec3;

// Flock-level summary for debug overlays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugInfo {
    // Mean position of all agents
    pub centroid: Vec3,
    // Sum of all agent velocities, left unaveraged
    pub group_velocity: Vec3,
}
