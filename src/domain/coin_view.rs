use serde::{Deserialize, Serialize};

use crate::domain::exchange_quote::ExchangeQuote;

/// Aggregate root for one traded coin: every quote it owns refers to the same coin.
/// Exchange names are unique within a `CoinView`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "CoinFields")]
pub struct CoinView {
    pub id: String,
    pub symbol: String,
    pub coin_name: String,
    exchanges: Vec<ExchangeQuote>,
}

// Deserialization goes through `add_exchange`, so duplicates are dropped
#[derive(Deserialize)]
struct CoinFields {
    id: String,
    symbol: String,
    coin_name: String,
    #[serde(default)]
    exchanges: Vec<ExchangeQuote>,
}

impl From<CoinFields> for CoinView {
    fn from(fields: CoinFields) -> Self {
        let mut coin = CoinView::new(fields.id, fields.symbol, fields.coin_name);
        for quote in fields.exchanges {
            let name = quote.exchange.clone();
            if !coin.add_exchange(quote) {
                log::warn!("{}: duplicate exchange '{}' dropped", coin.symbol, name);
            }
        }
        coin
    }
}

impl CoinView {
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        coin_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            coin_name: coin_name.into(),
            exchanges: Vec::new(),
        }
    }

    /// Adds a quote unless one for the same exchange already exists.
    /// Returns `false` (and leaves the view untouched) on a duplicate.
    pub fn add_exchange(&mut self, quote: ExchangeQuote) -> bool {
        if self.exchange(&quote.exchange).is_some() {
            return false;
        }
        self.exchanges.push(quote);
        true
    }

    pub fn with_exchange(mut self, quote: ExchangeQuote) -> Self {
        self.add_exchange(quote);
        self
    }

    /// Quotes in feed order.
    pub fn exchanges(&self) -> &[ExchangeQuote] {
        &self.exchanges
    }

    pub fn exchange(&self, name: &str) -> Option<&ExchangeQuote> {
        self.exchanges.iter().find(|q| q.exchange == name)
    }

    pub fn exchange_names(&self) -> Vec<&str> {
        self.exchanges.iter().map(|q| q.exchange.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

impl std::fmt::Display for CoinView {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) across {} exchange(s)",
            self.coin_name,
            self.symbol,
            self.exchanges.len()
        )
    }
}
