use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use statcore::block::SampleBlock;
use std::f32::consts::PI;

/// Configuration for generating synthetic sample blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub sample_count: usize,
    pub frequency: f32,
    pub amplitude: f32,
    pub noise: f32,
    pub seed: u64,
    pub label: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_count: 1024,
            frequency: 32.0,
            amplitude: 1.0,
            noise: 0.03,
            seed: 0,
            label: None,
        }
    }
}

fn build_sample_vector(config: &GeneratorConfig) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.sample_count);
    let span = config.sample_count.max(1) as f32;

    for index in 0..config.sample_count {
        let phase = (index as f32 / span) * 2.0 * PI * config.frequency;
        let jitter = if config.noise > 0.0 {
            rng.gen_range(-config.noise..config.noise)
        } else {
            0.0
        };
        samples.push(phase.sin() * config.amplitude + jitter);
    }

    samples
}

pub fn build_sample_block_from_config(config: &GeneratorConfig) -> anyhow::Result<SampleBlock> {
    // The kernel addresses blocks with a 32-bit count.
    u32::try_from(config.sample_count).context("sample count exceeds the kernel block range")?;
    let samples = build_sample_vector(config);
    Ok(SampleBlock::new(samples, config.label.clone()))
}

pub fn build_sample_block(sample_count: usize, seed: u64) -> anyhow::Result<SampleBlock> {
    let config = GeneratorConfig {
        sample_count,
        seed,
        ..Default::default()
    };
    build_sample_block_from_config(&config)
}
