//! Exchange identifiers
//!
//! Closed set of venues the broker integration knows about. The canonical
//! name of each variant is its uppercase identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exchange identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    // United States
    Nasdaq,
    Nyse,
    Amex,
    // Asia
    Hongkong,
    Shanghai,
    Shenzhen,
    Tokyo,
    Hanoi,
    Hochiminh,
}

/// Geographic group an exchange belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    UnitedStates,
    Asia,
}

impl Exchange {
    pub const COUNT: usize = 9;

    /// All exchanges in declaration order
    pub const ALL: [Exchange; Self::COUNT] = [
        Exchange::Nasdaq,
        Exchange::Nyse,
        Exchange::Amex,
        Exchange::Hongkong,
        Exchange::Shanghai,
        Exchange::Shenzhen,
        Exchange::Tokyo,
        Exchange::Hanoi,
        Exchange::Hochiminh,
    ];

    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Exchange::Nasdaq => "NASDAQ",
            Exchange::Nyse => "NYSE",
            Exchange::Amex => "AMEX",
            Exchange::Hongkong => "HONGKONG",
            Exchange::Shanghai => "SHANGHAI",
            Exchange::Shenzhen => "SHENZHEN",
            Exchange::Tokyo => "TOKYO",
            Exchange::Hanoi => "HANOI",
            Exchange::Hochiminh => "HOCHIMINH",
        }
    }

    #[inline]
    pub const fn region(&self) -> Region {
        match self {
            Exchange::Nasdaq | Exchange::Nyse | Exchange::Amex => Region::UnitedStates,
            _ => Region::Asia,
        }
    }

    /// Exact match against canonical names. No case folding here;
    /// see [`crate::core::registry::parse_exchange`] for the lenient form.
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Exchange {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::registry::parse_exchange(s)
            .ok_or_else(|| crate::Error::UnknownExchange(s.to_string()))
    }
}
