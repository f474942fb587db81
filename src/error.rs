use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid plot area: x={x}, y={y}, width={width}, height={height}")]
    InvalidPlotArea {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
