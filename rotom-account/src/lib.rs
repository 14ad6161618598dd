pub mod error;
pub mod exchange;
pub mod model;
pub mod shared;

pub use error::NormaliseError;
pub use exchange::{kraken::KrakenNormaliser, AccountNormaliser, ExchangeId};
pub use model::{
    instrument::{Asset, CurrencyPair},
    order::{LimitOrder, OpenOrders, OrderKind, OrderStatus},
    trade::{UserTrade, UserTrades},
    OrderId, Side, TradeId,
};
pub use shared::symbols::{SymbolTable, SymbolTableConfig};
