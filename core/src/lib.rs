//! Block-statistics kernels for the embedded DSP math core.
//!
//! The modules mirror the legacy fixed-length statistics routines while
//! providing bounds-checked inputs, a serializable block payload, and
//! telemetry hooks for the offline drivers.

pub mod block;
pub mod prelude;
pub mod stats;
pub mod telemetry;

pub use prelude::{KernelError, KernelResult};
