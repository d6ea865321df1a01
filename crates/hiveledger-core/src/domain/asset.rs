use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// Currency codes carried by chain assets.
///
/// The set is closed: anything else on the wire is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetSymbol {
    Hive,
    Hbd,
    Vests,
    Tests,
    Tbd,
    Steem,
    Sbd,
}

impl AssetSymbol {
    pub const ALL: [Self; 7] = [
        Self::Hive,
        Self::Hbd,
        Self::Vests,
        Self::Tests,
        Self::Tbd,
        Self::Steem,
        Self::Sbd,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hive => "HIVE",
            Self::Hbd => "HBD",
            Self::Vests => "VESTS",
            Self::Tests => "TESTS",
            Self::Tbd => "TBD",
            Self::Steem => "STEEM",
            Self::Sbd => "SBD",
        }
    }

    /// Fixed decimal precision of the symbol. The vesting-share unit keeps
    /// six places, everything else three.
    pub const fn precision(self) -> u32 {
        match self {
            Self::Vests => 6,
            _ => 3,
        }
    }
}

impl Display for AssetSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetSymbol {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "HIVE" => Ok(Self::Hive),
            "HBD" => Ok(Self::Hbd),
            "VESTS" => Ok(Self::Vests),
            "TESTS" => Ok(Self::Tests),
            "TBD" => Ok(Self::Tbd),
            "STEEM" => Ok(Self::Steem),
            "SBD" => Ok(Self::Sbd),
            other => Err(ConfigurationError::InvalidSymbol {
                value: other.to_owned(),
            }),
        }
    }
}

/// Fixed-precision monetary value with a currency symbol.
///
/// Immutable value object: arithmetic returns a fresh instance and always
/// requires both operands to share a symbol.
#[derive(Debug, Clone, Copy)]
pub struct Asset {
    amount: f64,
    symbol: AssetSymbol,
}

impl Asset {
    pub fn new(amount: f64, symbol: AssetSymbol) -> Result<Self, ConfigurationError> {
        if !amount.is_finite() {
            return Err(ConfigurationError::NonFiniteAmount);
        }
        Ok(Self { amount, symbol })
    }

    /// Parse the canonical two-token form, e.g. `42.000 HIVE`.
    pub fn parse(value: &str) -> Result<Self, ConfigurationError> {
        let mut tokens = value.split(' ');
        let (amount, symbol) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(amount), Some(symbol), None) => (amount, symbol),
            _ => {
                return Err(ConfigurationError::MalformedAsset {
                    value: value.to_owned(),
                })
            }
        };

        let symbol = AssetSymbol::from_str(symbol)?;
        let amount = amount
            .parse::<f64>()
            .map_err(|_| ConfigurationError::InvalidAmount {
                value: amount.to_owned(),
            })?;
        if !amount.is_finite() {
            return Err(ConfigurationError::InvalidAmount {
                value: amount.to_string(),
            });
        }

        Ok(Self { amount, symbol })
    }

    /// Parse while asserting the symbol, for payload fields whose unit is
    /// fixed by the operation (e.g. `reward_vests`).
    pub fn parse_expecting(
        value: &str,
        expected: AssetSymbol,
    ) -> Result<Self, ConfigurationError> {
        let asset = Self::parse(value)?;
        if asset.symbol != expected {
            return Err(ConfigurationError::UnexpectedSymbol {
                expected: expected.to_string(),
                actual: asset.symbol.to_string(),
            });
        }
        Ok(asset)
    }

    pub const fn amount(&self) -> f64 {
        self.amount
    }

    pub const fn symbol(&self) -> AssetSymbol {
        self.symbol
    }

    /// Amount scaled to the symbol's precision and rounded, the unit used
    /// for equality and ordering.
    fn scaled(&self) -> i64 {
        let factor = 10_f64.powi(self.symbol.precision() as i32);
        (self.amount * factor).round() as i64
    }

    fn require_same_symbol(
        &self,
        other: &Self,
        operation: &'static str,
    ) -> Result<(), ConfigurationError> {
        if self.symbol != other.symbol {
            return Err(ConfigurationError::SymbolMismatch {
                operation,
                left: self.symbol.to_string(),
                right: other.symbol.to_string(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> Result<Self, ConfigurationError> {
        self.require_same_symbol(other, "add")?;
        Self::new(self.amount + other.amount, self.symbol)
    }

    pub fn subtract(&self, other: &Self) -> Result<Self, ConfigurationError> {
        self.require_same_symbol(other, "subtract")?;
        Self::new(self.amount - other.amount, self.symbol)
    }

    pub fn multiply(&self, other: &Self) -> Result<Self, ConfigurationError> {
        self.require_same_symbol(other, "multiply")?;
        Self::new(self.amount * other.amount, self.symbol)
    }

    pub fn divide(&self, other: &Self) -> Result<Self, ConfigurationError> {
        self.require_same_symbol(other, "divide")?;
        Self::new(self.amount / other.amount, self.symbol)
    }

    /// The smaller of two same-symbol assets.
    pub fn min(&self, other: &Self) -> Result<Self, ConfigurationError> {
        self.require_same_symbol(other, "compare")?;
        Ok(if self.amount < other.amount {
            *self
        } else {
            *other
        })
    }

    /// The larger of two same-symbol assets.
    pub fn max(&self, other: &Self) -> Result<Self, ConfigurationError> {
        self.require_same_symbol(other, "compare")?;
        Ok(if self.amount > other.amount {
            *self
        } else {
            *other
        })
    }

    pub fn is_zero(&self) -> bool {
        self.scaled() == 0
    }
}

/// Equality at the symbol's fixed precision, so a canonical-text round trip
/// compares equal to the original.
impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.scaled() == other.scaled()
    }
}

impl Display for Asset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.precision$} {}",
            self.amount,
            self.symbol,
            precision = self.symbol.precision() as usize
        )
    }
}

impl Serialize for Asset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Asset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
