use crate::shared::symbols::SymbolTable;

// Canonical asset followed by its Kraken spellings. The first spelling is the
// altname Kraken uses in order descriptions and accepts in requests.
const KRAKEN_ASSETS: &[(&str, &[&str])] = &[
    ("BTC", &["XBT", "XXBT"]),
    ("ETH", &["ETH", "XETH"]),
    ("LTC", &["LTC", "XLTC"]),
    ("XRP", &["XRP", "XXRP"]),
    ("XLM", &["XLM", "XXLM"]),
    ("XMR", &["XMR", "XXMR"]),
    ("ZEC", &["ZEC", "XZEC"]),
    ("ETC", &["ETC", "XETC"]),
    ("REP", &["REP", "XREP"]),
    ("MLN", &["MLN", "XMLN"]),
    ("DOGE", &["XDG", "XXDG"]),
    ("BCH", &["BCH"]),
    ("ADA", &["ADA"]),
    ("DOT", &["DOT"]),
    ("SOL", &["SOL"]),
    ("LINK", &["LINK"]),
    ("ATOM", &["ATOM"]),
    ("XTZ", &["XTZ"]),
    ("EOS", &["EOS"]),
    ("TRX", &["TRX"]),
    ("UNI", &["UNI"]),
    ("USDT", &["USDT"]),
    ("USDC", &["USDC"]),
    ("DAI", &["DAI"]),
    ("TUSD", &["TUSD"]),
    ("USD", &["USD", "ZUSD"]),
    ("EUR", &["EUR", "ZEUR"]),
    ("GBP", &["GBP", "ZGBP"]),
    ("CAD", &["CAD", "ZCAD"]),
    ("JPY", &["JPY", "ZJPY"]),
    ("AUD", &["AUD", "ZAUD"]),
    ("CHF", &["CHF"]),
];

// Pairs whose code splits more than one way, or whose preferred spelling is
// not the concatenated altnames.
const KRAKEN_PAIRS: &[(&str, &str, &str)] = &[
    ("USDTZUSD", "USDT", "USD"),
    ("USDTUSD", "USDT", "USD"),
    ("USDTEUR", "USDT", "EUR"),
    ("USDCUSD", "USDC", "USD"),
    ("USDCUSDT", "USDC", "USDT"),
    ("TUSDUSD", "TUSD", "USD"),
];

impl SymbolTable {
    /// The built-in Kraken spot table.
    pub fn kraken() -> Self {
        let builder = KRAKEN_ASSETS
            .iter()
            .fold(SymbolTable::builder(), |builder, (canonical, wires)| {
                builder.assets(*canonical, wires.iter().copied())
            });

        KRAKEN_PAIRS
            .iter()
            .fold(builder, |builder, (wire, base, quote)| {
                builder.pair(*wire, *base, *quote)
            })
            .build()
            .unwrap_or_else(|error| {
                panic!("Built-in Kraken symbol table should never fail to build: {error}")
            })
    }
}
