/// Common error type for kernel execution.
#[derive(thiserror::Error, Debug)]
pub enum KernelError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type KernelResult<T> = Result<T, KernelError>;
