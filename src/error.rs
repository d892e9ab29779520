use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid axis range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid pixel span: start={start}, length={length}")]
    InvalidPixelSpan { start: f64, length: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
