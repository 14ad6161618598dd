use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{
    instrument::{Asset, CurrencyPair},
    order::OrderKind,
    OrderId, Side, TradeId,
};

/*----- */
// User trade
/*----- */
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct UserTrade {
    pub id: TradeId,
    // Several trades can share the same origin order
    pub order_id: OrderId,
    pub instrument: CurrencyPair,
    pub side: Side,
    pub kind: OrderKind,
    pub original_amount: Decimal,
    pub price: Decimal,
    pub cost: Decimal,
    pub fee: Decimal,
    pub fee_currency: Asset,
    pub timestamp: DateTime<Utc>,
}

/*----- */
// User trades
/*----- */
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct UserTrades {
    pub trades: Vec<UserTrade>,
    // Total trades available server side, not the length of this page
    pub count: u64,
}

impl UserTrades {
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&UserTrade> {
        self.trades.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserTrade> {
        self.trades.iter()
    }

    pub fn for_order<'a>(&'a self, order_id: &'a OrderId) -> impl Iterator<Item = &'a UserTrade> {
        self.trades
            .iter()
            .filter(move |trade| &trade.order_id == order_id)
    }
}

impl IntoIterator for UserTrades {
    type Item = UserTrade;
    type IntoIter = std::vec::IntoIter<UserTrade>;

    fn into_iter(self) -> Self::IntoIter {
        self.trades.into_iter()
    }
}
