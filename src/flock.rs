/*
 * Flock Simulator Module
 *
 * This module defines the FlockSimulator struct that owns the agent state:
 * parallel position and velocity arrays plus the validated configuration.
 * The host loop drives it through explicit construction and step calls and
 * reads agent state back through the accessors; orientation is derived
 * from the direction of travel on demand, never stored.
 */

use glam::{Quat, Vec3};
use log::debug;

use crate::config::SimulationConfig;
use crate::debug::DebugInfo;
use crate::error::FlockError;
use crate::physics;

pub struct FlockSimulator {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) velocities: Vec<Vec3>,
    pub(crate) config: SimulationConfig,
}

impl FlockSimulator {
    // Spawn agent_count agents inside the boundary sphere, all at rest.
    // Nothing is allocated when the configuration is rejected.
    pub fn new(config: SimulationConfig) -> Result<Self, FlockError> {
        config.validate()?;

        let mut rng = config.seeded_rng();
        let positions: Vec<Vec3> = (0..config.agent_count)
            .map(|_| {
                physics::random_spawn_position(&mut rng, config.boundary_center, config.boundary_radius)
            })
            .collect();
        let velocities = vec![Vec3::ZERO; config.agent_count];

        debug!(
            "spawned flock of {} agents within radius {} of {}",
            config.agent_count, config.boundary_radius, config.boundary_center
        );

        Ok(Self {
            positions,
            velocities,
            config,
        })
    }

    // Place agents at caller-chosen positions instead of random spawn
    // points; velocities still start at zero
    pub fn with_positions(config: SimulationConfig, positions: Vec<Vec3>) -> Result<Self, FlockError> {
        config.validate()?;
        if positions.len() != config.agent_count {
            return Err(FlockError::InvalidConfig("positions length must match agent_count"));
        }

        let velocities = vec![Vec3::ZERO; positions.len()];

        Ok(Self {
            positions,
            velocities,
            config,
        })
    }

    // Advance the simulation by one step of duration delta_time
    pub fn step(&mut self, delta_time: f32) {
        physics::step_flock(self, delta_time);
    }

    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.positions.len()
    }

    pub fn position(&self, index: usize) -> Result<Vec3, FlockError> {
        self.check_index(index)?;
        Ok(self.positions[index])
    }

    pub fn velocity(&self, index: usize) -> Result<Vec3, FlockError> {
        self.check_index(index)?;
        Ok(self.velocities[index])
    }

    // Unit direction of travel, zero while the agent is at rest
    pub fn heading(&self, index: usize) -> Result<Vec3, FlockError> {
        self.check_index(index)?;
        Ok(self.velocities[index].normalize_or_zero())
    }

    // Orientation facing the direction of travel, identity while at rest
    pub fn rotation(&self, index: usize) -> Result<Quat, FlockError> {
        self.check_index(index)?;
        Ok(physics::look_rotation(self.velocities[index]))
    }

    // Whole-array reads for renderers placing every agent per frame
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[must_use]
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    // Flock-level summary for debug overlays
    #[must_use]
    pub fn debug_info(&self) -> DebugInfo {
        let position_sum: Vec3 = self.positions.iter().sum();
        let group_velocity: Vec3 = self.velocities.iter().sum();

        DebugInfo {
            centroid: position_sum / self.positions.len() as f32,
            group_velocity,
        }
    }

    fn check_index(&self, index: usize) -> Result<(), FlockError> {
        if index >= self.positions.len() {
            return Err(FlockError::IndexOutOfRange {
                index,
                count: self.positions.len(),
            });
        }
        Ok(())
    }
}
