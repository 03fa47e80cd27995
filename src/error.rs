use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Configuration errors rejected before any stepping happens.
///
/// Running out of the bounding box or off the step budget is normal
/// termination, not an error; see [`crate::state::StopReason`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("time step must be strictly positive, got {0}")]
    NonPositiveDt(f64),

    #[error("step budget must be at least 1")]
    ZeroStepBudget,

    #[error("bounding box half-width must be strictly positive, got {0}")]
    NonPositiveBound(f64),

    #[error("initial state contains a non-finite component")]
    NonFiniteInitialState,
}
