//! Motion core of the landing page.
//!
//! Everything in here is plain Rust with no browser types, so it can be
//! driven by the hooks in [`crate::browser`] and tested natively.

pub mod hub;
pub mod interpolate;
pub mod pointer;
pub mod pose;
pub mod scroll;
pub mod spring;
pub mod stagger;
pub mod visibility;

use thiserror::Error;

pub use interpolate::derive;
pub use pointer::PointerPosition;
pub use pose::{Pose, Timing};
pub use scroll::ScrollMetrics;
pub use spring::Spring;
pub use stagger::{sequence, sequence_after, split_words};
pub use visibility::{InViewOptions, Rect, VisibilityTracker};

#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("interpolation needs as many outputs as inputs (got {inputs} inputs, {outputs} outputs)")]
    MismatchedStops { inputs: usize, outputs: usize },

    #[error("interpolation needs at least two stops, got {0}")]
    TooFewStops(usize),

    #[error("interpolation inputs must be ascending, stop {index} is out of order")]
    UnorderedStops { index: usize },
}
