//! config/demo.rs Demo feed knobs.
//!
//! The demo feed lets the CLI run without network access or a feed file.
//! It is deterministic: same candles every run, anchored at `anchor_ms`.

/// One exchange in the demo feed
pub struct DemoExchange {
    pub name: &'static str,
    pub coin_symbol: &'static str,
    pub color: &'static str,
    /// Close of the final demo candle
    pub last_close: f64,
}

/// One coin in the demo feed
pub struct DemoCoin {
    pub symbol: &'static str,
    pub coin_name: &'static str,
    pub exchanges: &'static [DemoExchange],
}

/// The Master Demo Configuration
pub struct DemoConfig {
    /// Candles generated per exchange
    pub klines_per_exchange: usize,
    pub interval: &'static str,
    /// Open time of the first candle (2025-01-01T00:00:00Z)
    pub anchor_ms: i64,
    pub coins: &'static [DemoCoin],
}

pub const DEMO: DemoConfig = DemoConfig {
    klines_per_exchange: 30,
    interval: "1m",
    anchor_ms: 1_735_689_600_000,
    coins: &[
        DemoCoin {
            symbol: "BTCUSDT",
            coin_name: "Bitcoin",
            exchanges: &[
                DemoExchange {
                    name: "binance",
                    coin_symbol: "BTCUSDT",
                    color: "#AF2AE9",
                    last_close: 50_000.0,
                },
                DemoExchange {
                    name: "kucoin",
                    coin_symbol: "BTC-USDT",
                    color: "#06D6CC",
                    last_close: 50_500.0,
                },
                DemoExchange {
                    name: "bybit",
                    coin_symbol: "BTCUSDT",
                    color: "#43a047",
                    last_close: 49_800.0,
                },
            ],
        },
        DemoCoin {
            symbol: "ETHUSDT",
            coin_name: "Ethereum",
            exchanges: &[
                DemoExchange {
                    name: "binance",
                    coin_symbol: "ETHUSDT",
                    color: "#AF2AE9",
                    last_close: 3_000.0,
                },
                DemoExchange {
                    name: "kucoin",
                    coin_symbol: "ETH-USDT",
                    color: "#06D6CC",
                    last_close: 3_000.0,
                },
            ],
        },
    ],
};
