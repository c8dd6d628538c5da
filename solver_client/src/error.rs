use thiserror::Error;

/// Ways a submission attempt can end without results. None of them are retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// One message per component holding a value its type does not allow
    #[error("Netlist is not valid: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("Netlist could not be encoded: {0}")]
    Encode(String),
    #[error("Solver is unreachable: {0}")]
    Transport(String),
    /// `Erro` reported by the solver, verbatim
    #[error("{0}")]
    Solver(String),
}

pub type Result<T> = std::result::Result<T, SubmitError>;
