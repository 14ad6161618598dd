pub mod model;
pub mod symbols;

use model::{KrakenEnvelope, KrakenOpenOrdersResult, KrakenTradesHistoryResult};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    error::NormaliseError,
    model::{
        order::{LimitOrder, OpenOrders},
        trade::{UserTrade, UserTrades},
    },
    shared::symbols::SymbolTable,
};

use super::{AccountNormaliser, ExchangeId};

/*----- */
// Kraken normaliser
/*----- */
#[derive(Debug, Clone)]
pub struct KrakenNormaliser {
    symbols: Arc<SymbolTable>,
}

impl KrakenNormaliser {
    pub fn new(symbols: Arc<SymbolTable>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    // Checks the envelope error list then deserialises `result` into the typed
    // wire record. Any shape mismatch is a MalformedEnvelope.
    fn result<'de, Output>(&self, document: &'de serde_json::Value) -> Result<Output, NormaliseError>
    where
        Output: Deserialize<'de>,
    {
        let envelope = KrakenEnvelope::deserialize(document)?;

        for warning in envelope.warnings() {
            warn!(exchange = %Self::ID, %warning, "Kraken response carried a warning");
        }

        let errors = envelope.errors();
        if !errors.is_empty() {
            return Err(NormaliseError::Exchange(errors));
        }

        let result = document
            .get("result")
            .filter(|result| !result.is_null())
            .ok_or_else(|| NormaliseError::malformed("missing field `result`"))?;

        Output::deserialize(result).map_err(NormaliseError::from)
    }
}

impl Default for KrakenNormaliser {
    fn default() -> Self {
        Self::new(Arc::new(SymbolTable::kraken()))
    }
}

impl AccountNormaliser for KrakenNormaliser {
    const ID: ExchangeId = ExchangeId::KrakenSpot;

    fn open_orders(&self, document: &serde_json::Value) -> Result<OpenOrders, NormaliseError> {
        let result = self.result::<KrakenOpenOrdersResult>(document)?;

        let orders = result
            .open
            .into_iter()
            .map(|(id, order)| LimitOrder::try_from((id, order, self.symbols.as_ref())))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            exchange = %Self::ID,
            orders = orders.len(),
            "normalised open orders"
        );

        Ok(OpenOrders(orders))
    }

    fn trade_history(&self, document: &serde_json::Value) -> Result<UserTrades, NormaliseError> {
        let result = self.result::<KrakenTradesHistoryResult>(document)?;

        let trades = result
            .trades
            .into_iter()
            .map(|(id, trade)| UserTrade::try_from((id, trade, self.symbols.as_ref())))
            .collect::<Result<Vec<_>, _>>()?;

        let count = match result.count {
            Some(count) if count < trades.len() as u64 => {
                warn!(
                    exchange = %Self::ID,
                    count,
                    trades = trades.len(),
                    "trade history count is smaller than the trades returned"
                );
                count
            }
            Some(count) => count,
            None => trades.len() as u64,
        };

        debug!(
            exchange = %Self::ID,
            trades = trades.len(),
            count,
            "normalised trade history"
        );

        Ok(UserTrades { trades, count })
    }
}
