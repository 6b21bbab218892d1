use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinearMapError {
    #[error("invalid match tolerance {got}: must be finite and > 0")]
    InvalidMatchTol { got: f64 },

    #[error("non-finite breakpoint ({input}, {output})")]
    NonFiniteValue { input: f64, output: f64 },

    #[error("breakpoint input {got} does not increase on last input {last}")]
    NonIncreasingInput { last: f64, got: f64 },
}
