pub mod log;
pub mod metrics;

pub use log::KernelLog;
pub use metrics::KernelCounters;
