/// Error type returned when a job id cannot be constructed
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum JobIdError {
    #[error("Invalid job ID '{input}', must be in the format 'job_[0-9]+_[0-9]+'")]
    InvalidFormat { input: String },
    #[error("Invalid encoded job ID length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

pub type JobIdResult<T> = Result<T, JobIdError>;
