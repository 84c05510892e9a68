use serde::{Deserialize, Serialize};

/// Sample vector consumed by the statistics kernels.
///
/// The block size a kernel is asked to cover comes from the caller, not the
/// payload, so a block may carry more samples than a given run reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleBlock {
    pub samples: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SampleBlock {
    pub fn new(samples: Vec<f32>, label: Option<String>) -> Self {
        Self { samples, label }
    }
}
