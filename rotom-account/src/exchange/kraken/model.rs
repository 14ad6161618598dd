use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    error::NormaliseError,
    model::{
        order::{LimitOrder, OrderKind, OrderStatus},
        trade::UserTrade,
        OrderId, Side, TradeId,
    },
    shared::{
        de::{
            de_f64_epoch_s_as_datetime_utc, de_null_as_default,
            de_optional_f64_epoch_s_as_datetime_utc, de_ordered_map,
        },
        decimal::{parse_decimal, parse_non_zero, parse_positive_amount},
        symbols::SymbolTable,
        utils::zero_decimal_default_value,
    },
};

/*----- */
// Envelope
/*----- */
// Every Kraken REST response is {"error": [..], "result": {..}}
#[derive(Debug, Deserialize, Default)]
pub struct KrakenEnvelope {
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub error: Vec<String>,
}

impl KrakenEnvelope {
    // Messages are "<severity><category>:<type>", severity is E or W
    pub fn errors(&self) -> Vec<String> {
        self.error
            .iter()
            .filter(|message| !message.starts_with('W'))
            .cloned()
            .collect()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &String> {
        self.error.iter().filter(|message| message.starts_with('W'))
    }
}

/*----- */
// Open orders
/*----- */
// Reference: https://docs.kraken.com/api/docs/rest-api/get-open-orders
#[derive(Debug, Deserialize)]
pub struct KrakenOpenOrdersResult {
    #[serde(deserialize_with = "de_ordered_map")]
    pub open: Vec<(String, KrakenOrder)>,
}

#[derive(Debug, Deserialize)]
pub struct KrakenOrder {
    #[serde(default)]
    pub userref: Option<i64>,
    pub status: KrakenOrderStatus,
    #[serde(default, deserialize_with = "de_optional_f64_epoch_s_as_datetime_utc")]
    pub opentm: Option<DateTime<Utc>>,
    pub descr: KrakenOrderDescription,
    pub vol: String,
    #[serde(default = "zero_decimal_default_value")]
    pub vol_exec: String,
    #[serde(default = "zero_decimal_default_value")]
    pub cost: String,
    #[serde(default = "zero_decimal_default_value")]
    pub fee: String,
    // Average fill price, 0 until something executes
    #[serde(default = "zero_decimal_default_value")]
    pub price: String,
}

#[derive(Debug, Deserialize)]
pub struct KrakenOrderDescription {
    pub pair: String,
    #[serde(rename = "type")]
    pub side: Side,
    pub ordertype: OrderKind,
    // Limit price, or the trigger price for stop orders
    #[serde(default = "zero_decimal_default_value")]
    pub price: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KrakenOrderStatus {
    Pending,
    Open,
    Closed,
    Canceled,
    Expired,
}

impl KrakenOrderStatus {
    pub fn normalise(self, executed: Decimal) -> OrderStatus {
        match self {
            KrakenOrderStatus::Pending => OrderStatus::PendingNew,
            KrakenOrderStatus::Open if executed > Decimal::ZERO => OrderStatus::PartiallyFilled,
            KrakenOrderStatus::Open => OrderStatus::New,
            KrakenOrderStatus::Closed => OrderStatus::Filled,
            KrakenOrderStatus::Canceled => OrderStatus::Canceled,
            KrakenOrderStatus::Expired => OrderStatus::Expired,
        }
    }
}

// Prefers the reported average price, else derives it from cost / vol_exec
fn average_price(
    price: Option<Decimal>,
    cost: Decimal,
    executed: Decimal,
) -> Option<Decimal> {
    match price {
        Some(price) => Some(price),
        None if executed > Decimal::ZERO && cost > Decimal::ZERO => cost.checked_div(executed),
        None => None,
    }
}

impl TryFrom<(String, KrakenOrder, &SymbolTable)> for LimitOrder {
    type Error = NormaliseError;

    fn try_from(
        (id, order, symbols): (String, KrakenOrder, &SymbolTable),
    ) -> Result<Self, Self::Error> {
        if id.trim().is_empty() {
            return Err(NormaliseError::malformed("open order with blank id"));
        }

        let instrument = symbols.resolve_pair(&order.descr.pair)?;
        let original_amount = parse_positive_amount(&id, "vol", &order.vol)?;
        let cumulative_amount = parse_decimal("vol_exec", &order.vol_exec)?;
        let limit_price = parse_decimal("descr.price", &order.descr.price)?;
        let cost = parse_decimal("cost", &order.cost)?;
        let fee = parse_decimal("fee", &order.fee)?;
        let reported_price = parse_non_zero("price", &order.price)?;

        Ok(Self {
            id: OrderId(id),
            instrument,
            side: order.descr.side,
            kind: order.descr.ordertype,
            status: order.status.normalise(cumulative_amount),
            original_amount,
            cumulative_amount,
            limit_price,
            average_price: average_price(reported_price, cost, cumulative_amount),
            fee,
            user_reference: order.userref.filter(|userref| *userref != 0),
            timestamp: order.opentm,
        })
    }
}

/*----- */
// Trade history
/*----- */
// Reference: https://docs.kraken.com/api/docs/rest-api/get-trade-history
#[derive(Debug, Deserialize)]
pub struct KrakenTradesHistoryResult {
    #[serde(deserialize_with = "de_ordered_map")]
    pub trades: Vec<(String, KrakenTrade)>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct KrakenTrade {
    pub ordertxid: String,
    pub pair: String,
    #[serde(deserialize_with = "de_f64_epoch_s_as_datetime_utc")]
    pub time: DateTime<Utc>,
    #[serde(rename = "type")]
    pub side: Side,
    pub ordertype: OrderKind,
    pub price: String,
    #[serde(default = "zero_decimal_default_value")]
    pub cost: String,
    #[serde(default = "zero_decimal_default_value")]
    pub fee: String,
    pub vol: String,
}

impl TryFrom<(String, KrakenTrade, &SymbolTable)> for UserTrade {
    type Error = NormaliseError;

    fn try_from(
        (id, trade, symbols): (String, KrakenTrade, &SymbolTable),
    ) -> Result<Self, Self::Error> {
        if id.trim().is_empty() {
            return Err(NormaliseError::malformed("trade with blank id"));
        }

        let instrument = symbols.resolve_pair(&trade.pair)?;
        let original_amount = parse_positive_amount(&id, "vol", &trade.vol)?;
        let price = parse_decimal("price", &trade.price)?;
        let cost = parse_decimal("cost", &trade.cost)?;
        let fee = parse_decimal("fee", &trade.fee)?;

        Ok(Self {
            id: TradeId(id),
            order_id: OrderId(trade.ordertxid),
            // Kraken charges spot fees in the quote currency by default
            fee_currency: instrument.quote.clone(),
            instrument,
            side: trade.side,
            kind: trade.ordertype,
            original_amount,
            price,
            cost,
            fee,
            timestamp: trade.time,
        })
    }
}
