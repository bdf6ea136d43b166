//! Exchange code registry
//!
//! Broker endpoints and the charting platform each spell exchanges their own
//! way. The registry holds one table per API context plus the TradingView
//! alias table, built once on first use and read-only afterwards.

use crate::core::{ApiContext, Exchange};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;
use tracing::Level;

/// Quote lookup codes (EXCD)
static HOGA_CODES: [(Exchange, &str); Exchange::COUNT] = [
    (Exchange::Nasdaq, "NAS"),
    (Exchange::Nyse, "NYS"),
    (Exchange::Amex, "AMS"),
    (Exchange::Hongkong, "HKS"),
    (Exchange::Shanghai, "SHS"),
    (Exchange::Shenzhen, "SZS"),
    (Exchange::Tokyo, "TSE"),
    (Exchange::Hanoi, "HNX"),
    (Exchange::Hochiminh, "HSX"),
];

/// Order placement codes (OVRS_EXCG_CD)
static ORDER_CODES: [(Exchange, &str); Exchange::COUNT] = [
    (Exchange::Nasdaq, "NASD"),
    (Exchange::Nyse, "NYSE"),
    (Exchange::Amex, "AMEX"),
    (Exchange::Hongkong, "SEHK"),
    (Exchange::Shanghai, "SHAA"),
    (Exchange::Shenzhen, "SZAA"),
    (Exchange::Tokyo, "TKSE"),
    (Exchange::Hanoi, "HASE"),
    (Exchange::Hochiminh, "VNSE"),
];

/// Buying-power inquiry codes
///
/// Same contents as ORDER today, but a separate endpoint; do not merge.
static BUYABLE_CODES: [(Exchange, &str); Exchange::COUNT] = [
    (Exchange::Nasdaq, "NASD"),
    (Exchange::Nyse, "NYSE"),
    (Exchange::Amex, "AMEX"),
    (Exchange::Hongkong, "SEHK"),
    (Exchange::Shanghai, "SHAA"),
    (Exchange::Shenzhen, "SZAA"),
    (Exchange::Tokyo, "TKSE"),
    (Exchange::Hanoi, "HASE"),
    (Exchange::Hochiminh, "VNSE"),
];

/// TradingView exchange codes. Many-to-one: BATS and ARCA collapse onto AMEX.
const TRADINGVIEW_ALIASES: [(&str, Exchange); 8] = [
    ("NASDAQ", Exchange::Nasdaq),
    ("NASD", Exchange::Nasdaq),
    ("NYSE", Exchange::Nyse),
    ("AMEX", Exchange::Amex),
    ("NSE", Exchange::Nyse),
    ("NSD", Exchange::Nasdaq),
    ("BATS", Exchange::Amex),
    ("ARCA", Exchange::Amex),
];

/// Global exchange code registry
static REGISTRY: OnceLock<ExchangeCodeRegistry> = OnceLock::new();

/// Per-context code tables plus the alias table
#[derive(Debug)]
pub struct ExchangeCodeRegistry {
    contexts: HashMap<&'static str, HashMap<Exchange, &'static str>>,
    aliases: HashMap<&'static str, Exchange>,
}

/// Ordered, serializable view of the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    pub contexts: BTreeMap<&'static str, BTreeMap<Exchange, &'static str>>,
    pub aliases: BTreeMap<&'static str, Exchange>,
}

/// Compiled-in code table for a context
fn builtin_table(ctx: ApiContext) -> &'static [(Exchange, &'static str)] {
    match ctx {
        ApiContext::Hoga => &HOGA_CODES,
        ApiContext::Order => &ORDER_CODES,
        ApiContext::Buyable => &BUYABLE_CODES,
    }
}

impl ExchangeCodeRegistry {
    fn build() -> Self {
        Self::from_tables(builtin_table)
    }

    /// Each context's map is built only from the slice `table` returns for it.
    fn from_tables(table: impl Fn(ApiContext) -> &'static [(Exchange, &'static str)]) -> Self {
        let contexts = ApiContext::ALL
            .iter()
            .map(|ctx| (ctx.as_str(), table(*ctx).iter().copied().collect()))
            .collect();
        let aliases = TRADINGVIEW_ALIASES.iter().copied().collect();

        let registry = Self { contexts, aliases };
        crate::log_registry!(
            Level::INFO,
            contexts = registry.contexts.len(),
            aliases = registry.aliases.len(),
            "Exchange code registry initialized"
        );
        registry
    }

    /// Shared instance, built on first access
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::build)
    }

    /// Broker code for `exchange` under `api_context`.
    ///
    /// `api_context` is matched exactly (the known keys are uppercase).
    pub fn resolve_code(&self, exchange: Exchange, api_context: &str) -> Option<&'static str> {
        let code = self
            .contexts
            .get(api_context)
            .and_then(|table| table.get(&exchange))
            .copied();
        if code.is_none() {
            crate::log_registry!(
                Level::DEBUG,
                exchange = exchange.name(),
                api_context,
                "No broker code for exchange"
            );
        }
        code
    }

    /// Case-insensitive match against canonical exchange names.
    pub fn parse_exchange(&self, text: &str) -> Option<Exchange> {
        let exchange = Exchange::from_name(&text.to_uppercase());
        if exchange.is_none() {
            crate::log_registry!(Level::DEBUG, text, "Unrecognized exchange name");
        }
        exchange
    }

    /// Case-insensitive lookup of a TradingView exchange code.
    pub fn resolve_alias(&self, text: &str) -> Option<Exchange> {
        let exchange = self.aliases.get(text.to_uppercase().as_str()).copied();
        if exchange.is_none() {
            crate::log_registry!(Level::DEBUG, text, "Unrecognized TradingView exchange code");
        }
        exchange
    }

    /// Context keys with populated tables
    pub fn contexts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.contexts.keys().copied()
    }

    /// Alias strings and the exchange each maps to
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, Exchange)> + '_ {
        self.aliases.iter().map(|(alias, exchange)| (*alias, *exchange))
    }

    /// Ordered copy of every table, for display or serialization
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            contexts: self
                .contexts
                .iter()
                .map(|(ctx, table)| (*ctx, table.iter().map(|(e, c)| (*e, *c)).collect()))
                .collect(),
            aliases: self.aliases.iter().map(|(a, e)| (*a, *e)).collect(),
        }
    }
}

/// See [`ExchangeCodeRegistry::resolve_code`]
#[inline]
pub fn resolve_code(exchange: Exchange, api_context: &str) -> Option<&'static str> {
    ExchangeCodeRegistry::global().resolve_code(exchange, api_context)
}

/// See [`ExchangeCodeRegistry::parse_exchange`]
#[inline]
pub fn parse_exchange(text: &str) -> Option<Exchange> {
    ExchangeCodeRegistry::global().parse_exchange(text)
}

/// See [`ExchangeCodeRegistry::resolve_alias`]
#[inline]
pub fn resolve_alias(text: &str) -> Option<Exchange> {
    ExchangeCodeRegistry::global().resolve_alias(text)
}
