use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::NormaliseError;

/*----- */
// Asset model
/*----- */
// Canonical, upper case asset code e.g. BTC
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
pub struct Asset(String);

impl Asset {
    pub fn new<S>(code: S) -> Self
    where
        S: AsRef<str>,
    {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Asset {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Asset {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/*----- */
// Currency pair model
/*----- */
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
pub struct CurrencyPair {
    pub base: Asset,
    pub quote: Asset,
}

impl CurrencyPair {
    pub fn new<A>(base: A, quote: A) -> Self
    where
        A: Into<Asset>,
    {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }
}

impl Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl From<(Asset, Asset)> for CurrencyPair {
    fn from((base, quote): (Asset, Asset)) -> Self {
        Self { base, quote }
    }
}

// Parses the canonical "BASE/QUOTE" form only, wire codes go through the SymbolTable
impl FromStr for CurrencyPair {
    type Err = NormaliseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((base, quote)) if !base.trim().is_empty() && !quote.trim().is_empty() => {
                Ok(CurrencyPair::new(base, quote))
            }
            _ => Err(NormaliseError::unresolvable(s)),
        }
    }
}
