use log::{info, warn};

/// Logging facade for kernel drivers.
pub struct KernelLog;

impl KernelLog {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    /// Flags a configured block too small to carry any spread. The kernel
    /// still returns zero for these; the flag only surfaces the condition.
    pub fn flag_degenerate(&self, block_size: u32) {
        warn!(
            "degenerate block of {} sample(s), variance forced to 0",
            block_size
        );
    }
}

impl Default for KernelLog {
    fn default() -> Self {
        Self::new()
    }
}
