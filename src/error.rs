use thiserror::Error;

/// Errors surfaced by kernel construction and the convolution engine.
///
/// Every variant is a precondition violation; the filter computation
/// itself cannot fail. Channel saturation clamps and is not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("kernel matrix is empty")]
    EmptyKernel,

    #[error("kernel matrix is not square: row {row} holds {len} weights, expected {rows}")]
    NotSquare { row: usize, len: usize, rows: usize },

    #[error("kernel stride must be odd, got {0}")]
    EvenStride(usize),

    #[error("image is {actual_w}x{actual_h} but the caller stated {stated_w}x{stated_h}")]
    DimensionMismatch {
        stated_w: usize,
        stated_h: usize,
        actual_w: usize,
        actual_h: usize,
    },
}

pub type FilterResult<T> = Result<T, FilterError>;
