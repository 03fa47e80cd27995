pub mod error;
pub mod fields;
pub mod forces;
pub mod integrator;
pub mod io;
pub mod scenarios;
pub mod state;

// Convenience re-exports for callers
pub mod types {
    pub use crate::error::SimError;
    pub use crate::state::{SimConfig, State, StopReason, Trajectory};
}
