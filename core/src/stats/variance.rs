use crate::prelude::{KernelError, KernelResult};

/// Samples folded per iteration on wide-pipeline targets.
const UNROLL: usize = 4;

/// Two-pass unbiased sample variance over fixed-length blocks.
pub struct VarianceKernel;

impl VarianceKernel {
    /// Variance of the first `block_size` samples of `src`.
    ///
    /// Blocks of zero or one samples carry no spread and yield `0.0`. The
    /// slice must hold at least `block_size` samples; shorter input is
    /// rejected instead of read out of bounds. NaN and infinity propagate
    /// through the arithmetic untouched.
    pub fn variance(src: &[f32], block_size: u32) -> KernelResult<f32> {
        // Degenerate sizes resolve before the slice is touched at all.
        if block_size <= 1 {
            return Ok(0.0);
        }
        let count = block_size as usize;
        if src.len() < count {
            return Err(KernelError::InvalidInput(format!(
                "block size {} exceeds {} available sample(s)",
                block_size,
                src.len()
            )));
        }

        let block = &src[..count];
        let mean = Self::block_sum(block) / block_size as f32;
        let squared = Self::deviation_sum(block, mean);
        Ok(squared / (block_size - 1) as f32)
    }

    #[cfg(feature = "wide-pipeline")]
    fn block_sum(block: &[f32]) -> f32 {
        Self::block_sum_unrolled(block)
    }

    #[cfg(not(feature = "wide-pipeline"))]
    fn block_sum(block: &[f32]) -> f32 {
        Self::block_sum_sequential(block)
    }

    #[cfg(feature = "wide-pipeline")]
    fn deviation_sum(block: &[f32], mean: f32) -> f32 {
        Self::deviation_sum_unrolled(block, mean)
    }

    #[cfg(not(feature = "wide-pipeline"))]
    fn deviation_sum(block: &[f32], mean: f32) -> f32 {
        Self::deviation_sum_sequential(block, mean)
    }

    /// Sums four samples per iteration; the tail loop covers `len % 4`.
    ///
    /// Accumulation must stay strictly left to right so that this path and
    /// the sequential one round identically.
    #[cfg_attr(not(feature = "wide-pipeline"), allow(dead_code))]
    fn block_sum_unrolled(block: &[f32]) -> f32 {
        let mut sum = 0.0f32;
        let mut groups = block.chunks_exact(UNROLL);
        for group in groups.by_ref() {
            sum += group[0];
            sum += group[1];
            sum += group[2];
            sum += group[3];
        }
        for &value in groups.remainder() {
            sum += value;
        }
        sum
    }

    #[cfg_attr(feature = "wide-pipeline", allow(dead_code))]
    fn block_sum_sequential(block: &[f32]) -> f32 {
        let mut sum = 0.0f32;
        for &value in block {
            sum += value;
        }
        sum
    }

    /// Squared deviations from `mean`, four samples per iteration with a
    /// tail loop, left to right like the sum pass.
    #[cfg_attr(not(feature = "wide-pipeline"), allow(dead_code))]
    fn deviation_sum_unrolled(block: &[f32], mean: f32) -> f32 {
        let mut sum = 0.0f32;
        let mut groups = block.chunks_exact(UNROLL);
        for group in groups.by_ref() {
            let mut deviation = group[0] - mean;
            sum += deviation * deviation;
            deviation = group[1] - mean;
            sum += deviation * deviation;
            deviation = group[2] - mean;
            sum += deviation * deviation;
            deviation = group[3] - mean;
            sum += deviation * deviation;
        }
        for &value in groups.remainder() {
            let deviation = value - mean;
            sum += deviation * deviation;
        }
        sum
    }

    #[cfg_attr(feature = "wide-pipeline", allow(dead_code))]
    fn deviation_sum_sequential(block: &[f32], mean: f32) -> f32 {
        let mut sum = 0.0f32;
        for &value in block {
            let deviation = value - mean;
            sum += deviation * deviation;
        }
        sum
    }
}
