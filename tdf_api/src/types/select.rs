use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Which price series `allHistories` returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Select {
    #[default]
    All,
    Bid,
    Ask,
    Last,
}

impl Select {
    pub fn as_str(&self) -> &'static str {
        match self {
            Select::All => "all",
            Select::Bid => "bid",
            Select::Ask => "ask",
            Select::Last => "last",
        }
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Select {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Select::All),
            "bid" => Ok(Select::Bid),
            "ask" => Ok(Select::Ask),
            "last" => Ok(Select::Last),
            _ => Err(Error::validation(
                crate::endpoint::ALL_HISTORIES,
                "options.select",
                format!("Must be one of \"all\", \"bid\", \"ask\", \"last\" (got {:?})!", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for select in [Select::All, Select::Bid, Select::Ask, Select::Last] {
            assert_eq!(select.as_str().parse::<Select>().unwrap(), select);
        }
    }

    #[test]
    fn unknown_value_is_validation_error() {
        let err = "close".parse::<Select>().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("options.select"));
    }

    #[test]
    fn default_is_all() {
        assert_eq!(Select::default(), Select::All);
    }
}
