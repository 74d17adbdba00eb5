/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the boid simulation core.
 * The crate owns the agent position/velocity arrays and the per-step
 * flocking rules; rendering and the frame loop belong to the host.
 */

// Re-export key components for easier access
pub use config::SimulationConfig;
pub use debug::DebugInfo;
pub use error::FlockError;
pub use flock::FlockSimulator;

// Define modules
pub mod config;
pub mod debug;
pub mod error;
pub mod flock;
pub mod physics;

// Constants
pub const COHESION_DIVISOR: f32 = 100.0;
pub const MIN_AGENT_COUNT: usize = 2;
