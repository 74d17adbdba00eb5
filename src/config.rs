/*
 * Simulation Configuration Module
 *
 * This module defines the SimulationConfig struct that contains all the
 * adjustable parameters for the flock simulation, the valid range for each
 * host-exposed parameter, and the validation that runs once when a
 * simulator is constructed. Parameters are fixed for the lifetime of a
 * simulator and never re-checked inside the step loop.
 */

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::error::FlockError;
use crate::MIN_AGENT_COUNT;

// Parameters for the simulation, validated at construction
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub agent_count: usize,
    pub max_speed: f32,
    pub neighbor_radius: f32,
    pub alignment_gain: f32,
    pub use_boundary: bool,
    pub boundary_center: Vec3,
    pub boundary_radius: f32,
    // Seed for the initial placement, drawn from entropy when absent
    pub rng_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            agent_count: 50,
            max_speed: 10.0,
            neighbor_radius: 1.0,
            alignment_gain: 0.1,
            use_boundary: true,
            boundary_center: Vec3::ZERO,
            boundary_radius: 10.0,
            rng_seed: None,
        }
    }
}

impl SimulationConfig {
    // Get parameter ranges exposed to host tuning surfaces
    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        1.0..=50.0
    }

    pub fn get_neighbor_radius_range() -> std::ops::RangeInclusive<f32> {
        0.01..=5.0
    }

    pub fn get_alignment_gain_range() -> std::ops::RangeInclusive<f32> {
        0.01..=1.0
    }

    // Check every parameter once, before any simulation state is allocated.
    // NaN values fail the range checks because RangeInclusive::contains
    // compares with ordinary ordering.
    pub fn validate(&self) -> Result<(), FlockError> {
        if self.agent_count < MIN_AGENT_COUNT {
            return Err(FlockError::InvalidConfig("agent_count must be at least 2"));
        }
        if !Self::get_max_speed_range().contains(&self.max_speed) {
            return Err(FlockError::InvalidConfig("max_speed outside 1..=50"));
        }
        if !Self::get_neighbor_radius_range().contains(&self.neighbor_radius) {
            return Err(FlockError::InvalidConfig("neighbor_radius outside 0.01..=5"));
        }
        if !Self::get_alignment_gain_range().contains(&self.alignment_gain) {
            return Err(FlockError::InvalidConfig("alignment_gain outside 0.01..=1"));
        }
        if !self.boundary_center.is_finite() {
            return Err(FlockError::InvalidConfig("boundary_center must be finite"));
        }
        // The boundary sphere doubles as the spawn region, so the radius must
        // be usable even when the border steering is switched off
        if !(self.boundary_radius > 0.0) || !self.boundary_radius.is_finite() {
            return Err(FlockError::InvalidConfig("boundary_radius must be positive and finite"));
        }
        Ok(())
    }

    // RNG for the initial placement: reproducible when a seed is given,
    // seeded from entropy otherwise
    pub fn seeded_rng(&self) -> SmallRng {
        match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SimulationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_tiny_flock() {
        let config = SimulationConfig {
            agent_count: 1,
            ..SimulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(FlockError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_out_of_range_speed() {
        for max_speed in [0.5, 50.1, f32::NAN] {
            let config = SimulationConfig {
                max_speed,
                ..SimulationConfig::default()
            };
            assert!(matches!(config.validate(), Err(FlockError::InvalidConfig(_))));
        }
    }

    #[test]
    fn rejects_out_of_range_neighbor_radius() {
        for neighbor_radius in [0.001, 5.5] {
            let config = SimulationConfig {
                neighbor_radius,
                ..SimulationConfig::default()
            };
            assert!(matches!(config.validate(), Err(FlockError::InvalidConfig(_))));
        }
    }

    #[test]
    fn rejects_out_of_range_alignment_gain() {
        for alignment_gain in [0.0, 1.5] {
            let config = SimulationConfig {
                alignment_gain,
                ..SimulationConfig::default()
            };
            assert!(matches!(config.validate(), Err(FlockError::InvalidConfig(_))));
        }
    }

    #[test]
    fn rejects_bad_boundary_radius_even_without_border_steering() {
        for boundary_radius in [0.0, -3.0, f32::NAN] {
            let config = SimulationConfig {
                use_boundary: false,
                boundary_radius,
                ..SimulationConfig::default()
            };
            assert!(matches!(config.validate(), Err(FlockError::InvalidConfig(_))));
        }
    }

    #[test]
    fn rejects_non_finite_boundary_center() {
        let config = SimulationConfig {
            boundary_center: Vec3::new(f32::INFINITY, 0.0, 0.0),
            ..SimulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(FlockError::InvalidConfig(_))));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        use rand::Rng;

        let config = SimulationConfig {
            rng_seed: Some(7),
            ..SimulationConfig::default()
        };
        let a: u64 = config.seeded_rng().gen();
        let b: u64 = config.seeded_rng().gen();
        assert_eq!(a, b);
    }
}
