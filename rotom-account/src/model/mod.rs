pub mod instrument;
pub mod order;
pub mod trade;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/*----- */
// Side
/*----- */
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/*----- */
// Identifiers
/*----- */
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize)]
pub struct OrderId(pub String);

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize)]
pub struct TradeId(pub String);

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TradeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for TradeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_side_wire_spelling() {
        assert_eq!(serde_json::from_str::<Side>(r#""buy""#).unwrap(), Side::Buy);
        assert_eq!(serde_json::from_str::<Side>(r#""sell""#).unwrap(), Side::Sell);
        assert!(serde_json::from_str::<Side>(r#""b""#).is_err());
        assert!(serde_json::from_str::<Side>(r#""BUY""#).is_err());

        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), r#""sell""#);
    }
}
