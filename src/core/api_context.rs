//! Broker API endpoint families
//!
//! Each family expects its own exchange code field. Lookups in the registry
//! are keyed by the raw string so unknown families are a plain miss.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiContext {
    /// Quote / order-book lookup (EXCD)
    Hoga,
    /// Order placement (OVRS_EXCG_CD)
    Order,
    /// Buying-power inquiry
    Buyable,
}

impl ApiContext {
    pub const ALL: [ApiContext; 3] = [ApiContext::Hoga, ApiContext::Order, ApiContext::Buyable];

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ApiContext::Hoga => "HOGA",
            ApiContext::Order => "ORDER",
            ApiContext::Buyable => "BUYABLE",
        }
    }

    /// Case-sensitive: "hoga" is not a context key.
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "HOGA" => Some(ApiContext::Hoga),
            "ORDER" => Some(ApiContext::Order),
            "BUYABLE" => Some(ApiContext::Buyable),
            _ => None,
        }
    }
}

impl fmt::Display for ApiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiContext {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| crate::Error::UnknownContext(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for ctx in ApiContext::ALL {
            assert_eq!(ApiContext::from_key(ctx.as_str()), Some(ctx));
        }
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert_eq!(ApiContext::from_key("order"), None);
        assert_eq!(ApiContext::from_key("Buyable"), None);
        assert!("hoga".parse::<ApiContext>().is_err());
    }
}
