use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A position change for one symbol. Positive amounts buy, negative amounts sell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Security {
    pub symbol: String,
    pub amount: f64,
}

impl Security {
    pub fn new(symbol: &str, amount: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            amount,
        }
    }

    pub fn buy(symbol: &str, amount: f64) -> Self {
        Self::new(symbol, amount.abs())
    }

    pub fn sell(symbol: &str, amount: f64) -> Self {
        Self::new(symbol, -amount.abs())
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.symbol, self.amount)
    }
}

/// Parses the `SYMBOL=AMOUNT` form used on the command line.
impl FromStr for Security {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (symbol, amount) = s
            .split_once('=')
            .ok_or_else(|| format!("expected SYMBOL=AMOUNT, got '{}'", s))?;
        let amount = amount
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid amount '{}': {}", amount, e))?;
        Ok(Security::new(symbol.trim(), amount))
    }
}

/// An ordered batch of securities sent in one trade.
///
/// A single [`Security`] converts into a one-element batch, so `trade` accepts
/// either shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Securities(Vec<Security>);

impl Securities {
    pub fn iter(&self) -> std::slice::Iter<'_, Security> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Security> for Securities {
    fn from(security: Security) -> Self {
        Securities(vec![security])
    }
}

impl From<Vec<Security>> for Securities {
    fn from(securities: Vec<Security>) -> Self {
        Securities(securities)
    }
}

impl From<&[Security]> for Securities {
    fn from(securities: &[Security]) -> Self {
        Securities(securities.to_vec())
    }
}

impl FromIterator<Security> for Securities {
    fn from_iter<I: IntoIterator<Item = Security>>(iter: I) -> Self {
        Securities(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Securities {
    type Item = &'a Security;
    type IntoIter = std::slice::Iter<'a, Security>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
