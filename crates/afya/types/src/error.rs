/// Errors from parsing AfyaNumeriq values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    #[error("invalid clause number: {0}")]
    InvalidClauseNumber(String),
    #[error("invalid clause id: {0}")]
    InvalidClauseId(String),
}
