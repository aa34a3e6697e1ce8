use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Did not converge: {what}")]
    NotConverged { what: &'static str },
}
