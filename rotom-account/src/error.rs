use thiserror::Error;

/*----- */
// Normalise Errors
/*----- */
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormaliseError {
    #[error("Malformed response envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Unable to resolve wire symbol {code}")]
    UnresolvableSymbol { code: String },

    #[error("Field {field} is not a valid decimal: {value:?}")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("Record {id} has a non-positive amount: {amount}")]
    NonPositiveAmount { id: String, amount: String },

    #[error("Exchange returned errors: {0:?}")]
    Exchange(Vec<String>),

    #[error("Invalid symbol table config: {0}")]
    Config(String),
}

impl NormaliseError {
    pub fn malformed<S>(reason: S) -> Self
    where
        S: Into<String>,
    {
        NormaliseError::MalformedEnvelope(reason.into())
    }

    pub fn unresolvable<S>(code: S) -> Self
    where
        S: Into<String>,
    {
        NormaliseError::UnresolvableSymbol { code: code.into() }
    }
}

impl From<serde_json::Error> for NormaliseError {
    fn from(error: serde_json::Error) -> Self {
        NormaliseError::MalformedEnvelope(error.to_string())
    }
}
