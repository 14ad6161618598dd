use rotom_account::{
    AccountNormaliser, CurrencyPair, KrakenNormaliser, NormaliseError, OrderId, OrderKind,
    OrderStatus, Side, SymbolTable, SymbolTableConfig,
};
use rust_decimal::Decimal;
use serde_json::Value;
use std::{str::FromStr, sync::Arc, thread};

const OPEN_ORDERS_BODY: &str = include_str!("fixtures/kraken_open_orders.json");
const TRADES_HISTORY_BODY: &str = include_str!("fixtures/kraken_trades_history.json");

fn document(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

fn decimal(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

#[test]
fn test_open_orders() {
    let document = document(OPEN_ORDERS_BODY);
    let expected_len = document["result"]["open"].as_object().unwrap().len();

    let orders = KrakenNormaliser::default().open_orders(&document).unwrap();
    assert_eq!(orders.len(), expected_len);

    for order in &orders {
        assert!(order.original_amount > Decimal::ZERO);
        assert!(!order.id.0.trim().is_empty());
    }

    let first = orders.get(0).unwrap();
    assert_eq!(first.id, OrderId("OQCLML-BW3P3-BUCMWZ".to_owned()));
    assert_eq!(first.instrument, CurrencyPair::new("BTC", "USD"));
    assert_eq!(first.side, Side::Buy);
    assert_eq!(first.kind, OrderKind::Limit);
    assert_eq!(first.status, OrderStatus::PartiallyFilled);
    assert_eq!(first.original_amount, decimal("1.25"));
    assert_eq!(first.cumulative_amount, decimal("0.375"));
    assert_eq!(first.limit_price, decimal("30010.0"));

    let second = orders.get(1).unwrap();
    assert_eq!(second.id, OrderId("OB5VMB-B4U2U-DK2WRW".to_owned()));
    assert_eq!(second.instrument, CurrencyPair::new("LTC", "USD"));
    assert_eq!(second.status, OrderStatus::New);
    assert_eq!(second.original_amount, decimal("0.275"));
    assert_eq!(second.limit_price, decimal("14500.0"));
    assert_eq!(second.average_price, None);
    assert_eq!(second.user_reference, Some(120));
}

#[test]
fn test_open_orders_from_slice_matches_value() {
    let normaliser = KrakenNormaliser::default();

    let from_slice = normaliser
        .open_orders_from_slice(OPEN_ORDERS_BODY.as_bytes())
        .unwrap();
    let from_value = normaliser.open_orders(&document(OPEN_ORDERS_BODY)).unwrap();

    assert_eq!(from_slice, from_value);
}

#[test]
fn test_trade_history() {
    let document = document(TRADES_HISTORY_BODY);
    let expected_len = document["result"]["trades"].as_object().unwrap().len();

    let trades = KrakenNormaliser::default().trade_history(&document).unwrap();
    assert_eq!(trades.len(), expected_len);
    assert_eq!(trades.count, 2346);

    for trade in trades.iter() {
        assert!(trade.original_amount > Decimal::ZERO);
        assert!(!trade.id.0.trim().is_empty());
    }

    let first = trades.get(0).unwrap();
    assert_eq!(first.id.0, "THVRQM-33VKH-UCI7BS");
    assert_eq!(first.instrument, CurrencyPair::new("BTC", "USD"));
    assert_eq!(first.original_amount, decimal("0.02"));
    assert_eq!(first.price.to_string(), "30010.00000");
    assert_eq!(first.cost, decimal("600.2"));

    let second = trades.get(1).unwrap();
    assert_eq!(second.id.0, "TCWJEG-FL4SZ-3FKGH6");
    assert_eq!(second.instrument, CurrencyPair::new("BTC", "USD"));

    let last = trades.iter().last().unwrap();
    assert_eq!(last.id.0, "TUBIJ2-LJD26-EW3WKN");
    assert_eq!(last.instrument, CurrencyPair::new("BTC", "USD"));
}

#[test]
fn test_trade_history_instruments() {
    let trades = KrakenNormaliser::default()
        .trade_history(&document(TRADES_HISTORY_BODY))
        .unwrap();

    let has = |pair: CurrencyPair| trades.iter().any(|trade| trade.instrument == pair);
    assert!(has(CurrencyPair::new("BTC", "USD")));
    assert!(has(CurrencyPair::new("BTC", "EUR")));
    assert!(has(CurrencyPair::new("LTC", "USD")));
    assert!(has(CurrencyPair::new("LTC", "BTC")));

    let market_sell = trades
        .iter()
        .find(|trade| trade.id.0 == "TJUW2K-FLX2N-AR2FLU")
        .unwrap();
    assert_eq!(market_sell.side, Side::Sell);
    assert_eq!(market_sell.kind, OrderKind::Market);
    assert_eq!(market_sell.fee, decimal("7.5"));
    assert_eq!(market_sell.fee_currency.as_str(), "USD");
}

#[test]
fn test_trades_reference_open_order() {
    let normaliser = KrakenNormaliser::default();
    let orders = normaliser.open_orders(&document(OPEN_ORDERS_BODY)).unwrap();
    let trades = normaliser
        .trade_history(&document(TRADES_HISTORY_BODY))
        .unwrap();

    let order = orders.get(0).unwrap();
    let filled = trades
        .for_order(&order.id)
        .map(|trade| trade.original_amount)
        .sum::<Decimal>();

    assert_eq!(trades.for_order(&order.id).count(), 3);
    assert_eq!(
        trades.for_order(&order.id).next().unwrap().instrument,
        order.instrument
    );
    assert_eq!(filled, decimal("0.405"));
}

#[test]
fn test_normalising_twice_is_equal() {
    let normaliser = KrakenNormaliser::default();
    let document = document(TRADES_HISTORY_BODY);

    assert_eq!(
        normaliser.trade_history(&document).unwrap(),
        normaliser.trade_history(&document).unwrap()
    );
}

#[test]
fn test_custom_symbol_table_missing_asset() {
    // A table without LTC cannot resolve the whole response
    let config = SymbolTableConfig::from_json(
        r#"{
            "assets": [
                { "canonical": "BTC", "wire": ["XBT", "XXBT"] },
                { "canonical": "USD", "wire": ["USD", "ZUSD"] }
            ]
        }"#,
    )
    .unwrap();
    let normaliser = KrakenNormaliser::new(Arc::new(SymbolTable::try_from(config).unwrap()));

    assert_eq!(
        normaliser.open_orders(&document(OPEN_ORDERS_BODY)).unwrap_err(),
        NormaliseError::UnresolvableSymbol {
            code: "LTCUSD".to_owned()
        }
    );
}

#[test]
fn test_concurrent_normalisation() {
    let normaliser = Arc::new(KrakenNormaliser::default());
    let expected = normaliser
        .trade_history(&document(TRADES_HISTORY_BODY))
        .unwrap();

    let handles = (0..4)
        .map(|_| {
            let normaliser = Arc::clone(&normaliser);
            thread::spawn(move || {
                normaliser
                    .trade_history(&document(TRADES_HISTORY_BODY))
                    .unwrap()
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
