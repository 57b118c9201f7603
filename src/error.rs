use pathknob_core::RangeError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum KnobError {
    #[error("invalid value range: {0}")]
    InvalidRange(#[from] RangeError),

    #[error("padding must be a finite, non-negative number, got {0}")]
    InvalidPadding(f32),

    #[error("minimum point spacing must be a finite, non-negative number, got {0}")]
    InvalidSpacing(f32),

    #[error("sample step must be a finite, positive number, got {0}")]
    InvalidSampleStep(f32),

    #[error("handle size must be a finite, positive number, got {0}")]
    InvalidHandleSize(f32),
}
