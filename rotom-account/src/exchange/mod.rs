pub mod kraken;

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::error;

use crate::{
    error::NormaliseError,
    model::{order::OpenOrders, trade::UserTrades},
};

/*----- */
// Exchange IDs
/*----- */
#[derive(Debug, PartialEq, Hash, Eq, Clone, Copy, Ord, PartialOrd, Deserialize, Serialize)]
pub enum ExchangeId {
    KrakenSpot,
}

impl ExchangeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeId::KrakenSpot => "krakenspot",
        }
    }
}

impl Display for ExchangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/*----- */
// Account normaliser trait
/*----- */
// Maps an exchange's private account responses onto the shared domain model.
// Implementations are pure: the transport layer fetches and parses, this only
// checks shape and translates.
pub trait AccountNormaliser {
    const ID: ExchangeId;

    fn open_orders(&self, document: &serde_json::Value) -> Result<OpenOrders, NormaliseError>;

    fn trade_history(&self, document: &serde_json::Value) -> Result<UserTrades, NormaliseError>;

    fn open_orders_from_slice(&self, payload: &[u8]) -> Result<OpenOrders, NormaliseError> {
        self.open_orders(&parse_document(Self::ID, payload)?)
    }

    fn trade_history_from_slice(&self, payload: &[u8]) -> Result<UserTrades, NormaliseError> {
        self.trade_history(&parse_document(Self::ID, payload)?)
    }
}

fn parse_document(exchange: ExchangeId, payload: &[u8]) -> Result<serde_json::Value, NormaliseError> {
    serde_json::from_slice::<serde_json::Value>(payload).map_err(|serde_error| {
        error!(
            %exchange,
            ?serde_error,
            response_body = %String::from_utf8_lossy(payload),
            "error deserializing account response"
        );
        NormaliseError::from(serde_error)
    })
}
