//! Error types for Finpulse

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not enough data: need at least {need} points, got {got}")]
    InsufficientData { got: usize, need: usize },

    #[error("Invalid score input: {0}")]
    InvalidScoreInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
