use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{instrument::CurrencyPair, OrderId, Side};

/*----- */
// Order kind
/*----- */
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderKind {
    Market,
    Limit,
    Iceberg,
    StopLoss,
    TakeProfit,
    StopLossLimit,
    TakeProfitLimit,
    TrailingStop,
    TrailingStopLimit,
    SettlePosition,
}

/*----- */
// Order status
/*----- */
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PendingNew,
    New,
    PartiallyFilled,
    Filled,
    Canceled,
    Expired,
}

impl OrderStatus {
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            OrderStatus::PendingNew | OrderStatus::New | OrderStatus::PartiallyFilled
        )
    }
}

/*----- */
// Limit order
/*----- */
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct LimitOrder {
    pub id: OrderId,
    pub instrument: CurrencyPair,
    pub side: Side,
    pub kind: OrderKind,
    pub status: OrderStatus,
    pub original_amount: Decimal,
    pub cumulative_amount: Decimal,
    pub limit_price: Decimal,
    // None until something has been filled
    pub average_price: Option<Decimal>,
    pub fee: Decimal,
    pub user_reference: Option<i64>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl LimitOrder {
    pub fn remaining_amount(&self) -> Decimal {
        self.original_amount - self.cumulative_amount
    }
}

/*----- */
// Open orders
/*----- */
// Orders in the order the exchange listed them
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct OpenOrders(pub Vec<LimitOrder>);

impl OpenOrders {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LimitOrder> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LimitOrder> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<LimitOrder> {
        self.0
    }
}

impl IntoIterator for OpenOrders {
    type Item = LimitOrder;
    type IntoIter = std::vec::IntoIter<LimitOrder>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OpenOrders {
    type Item = &'a LimitOrder;
    type IntoIter = std::slice::Iter<'a, LimitOrder>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
