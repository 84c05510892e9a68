use crate::workflow::config::AnalysisConfig;
use anyhow::Context;
use serde::Serialize;
use statcore::block::SampleBlock;
use statcore::stats::VarianceKernel;
use statcore::telemetry::{KernelCounters, KernelLog};

/// Outcome of one block run, serialized into the report log.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub variance: f32,
    pub block_size: u32,
    pub degenerate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

pub struct Runner {
    config: AnalysisConfig,
    counters: KernelCounters,
    logger: KernelLog,
}

impl Runner {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            counters: KernelCounters::new(),
            logger: KernelLog::new(),
        }
    }

    pub fn execute(&self, block: &SampleBlock) -> anyhow::Result<AnalysisResult> {
        let block_size = self.config.block_size;
        let degenerate = block_size <= 1;
        if degenerate {
            self.logger.flag_degenerate(block_size);
            self.counters.record_degenerate();
        }

        let variance = match VarianceKernel::variance(&block.samples, block_size) {
            Ok(value) => value,
            Err(err) => {
                self.counters.record_rejected();
                return Err(err).context("computing block variance");
            }
        };

        self.counters.record_processed();
        self.logger.record(&format!(
            "variance {:.6} over a {} sample block",
            variance, block_size
        ));

        Ok(AnalysisResult {
            variance,
            block_size,
            degenerate,
            label: block.label.clone(),
        })
    }

    /// Snapshot of (processed, degenerate, rejected) block counts.
    pub fn counters(&self) -> (usize, usize, usize) {
        self.counters.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_sample_block;

    #[test]
    fn runner_computes_variance_for_generated_block() {
        let config = AnalysisConfig::from_args(16, 7);
        let runner = Runner::new(config);
        let block = build_sample_block(16, 7).unwrap();
        let result = runner.execute(&block).unwrap();
        assert!(result.variance.is_finite());
        assert!(result.variance >= 0.0);
        assert_eq!(result.block_size, 16);
        assert_eq!(runner.counters(), (1, 0, 0));
    }

    #[test]
    fn runner_flags_degenerate_block_sizes() {
        let config = AnalysisConfig::from_args(1, 0);
        let runner = Runner::new(config);
        let block = SampleBlock::new(vec![5.0], None);
        let result = runner.execute(&block).unwrap();
        assert_eq!(result.variance, 0.0);
        assert!(result.degenerate);
        assert_eq!(runner.counters(), (1, 1, 0));
    }

    #[test]
    fn runner_rejects_blocks_shorter_than_configured() {
        let config = AnalysisConfig::from_args(8, 0);
        let runner = Runner::new(config);
        let block = SampleBlock::new(vec![1.0, 2.0, 3.0], None);
        assert!(runner.execute(&block).is_err());
        assert_eq!(runner.counters(), (0, 0, 1));
    }
}
