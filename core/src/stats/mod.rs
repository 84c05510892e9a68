pub mod variance;

pub use variance::VarianceKernel;
