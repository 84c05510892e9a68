use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for a single offline analysis run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub block_size: u32,
    pub seed: u64,
    pub frequency: f32,
    pub noise: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            block_size: 1024,
            seed: 0,
            frequency: 32.0,
            noise: 0.03,
        }
    }
}

impl AnalysisConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading analysis config {}", path_ref.display()))?;
        let config: AnalysisConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing analysis config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(block_size: u32, seed: u64) -> Self {
        Self {
            block_size,
            seed,
            ..Default::default()
        }
    }

    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            sample_count: self.block_size as usize,
            frequency: self.frequency,
            noise: self.noise,
            seed: self.seed,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_feeds_the_generator() {
        let cfg = AnalysisConfig::from_args(512, 9);
        let generator = cfg.to_generator_config();
        assert_eq!(generator.sample_count, 512);
        assert_eq!(generator.seed, 9);
    }

    #[test]
    fn config_load_reads_yaml_and_keeps_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"block_size: 256\nseed: 3\nnoise: 0.1\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = AnalysisConfig::load(&path).unwrap();
        assert_eq!(cfg.block_size, 256);
        assert_eq!(cfg.seed, 3);
        assert!((cfg.frequency - 32.0).abs() < f32::EPSILON);
    }
}
