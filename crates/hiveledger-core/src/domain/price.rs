use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::domain::Asset;
use crate::ConfigurationError;

/// Exchange rate expressed as a base/quote asset pair.
///
/// Both legs must be non-zero and carry distinct symbols; an instance that
/// exists is always convertible in both directions. Construction is the
/// only gate, so there is no `Deserialize` to sneak past it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Price {
    base: Asset,
    quote: Asset,
}

impl Price {
    pub fn new(base: Asset, quote: Asset) -> Result<Self, ConfigurationError> {
        if base.is_zero() || quote.is_zero() {
            return Err(ConfigurationError::ZeroPriceLeg);
        }
        if base.symbol() == quote.symbol() {
            return Err(ConfigurationError::SameSymbolPrice {
                symbol: base.symbol().to_string(),
            });
        }
        Ok(Self { base, quote })
    }

    pub const fn base(&self) -> &Asset {
        &self.base
    }

    pub const fn quote(&self) -> &Asset {
        &self.quote
    }

    /// Convert an asset denominated in one side of the pair into the other.
    pub fn convert(&self, asset: &Asset) -> Result<Asset, ConfigurationError> {
        if asset.symbol() == self.base.symbol() {
            if self.base.amount() <= 0.0 {
                return Err(ConfigurationError::NonPositiveDivisor { side: "base" });
            }
            Asset::new(
                asset.amount() * self.quote.amount() / self.base.amount(),
                self.quote.symbol(),
            )
        } else if asset.symbol() == self.quote.symbol() {
            if self.quote.amount() <= 0.0 {
                return Err(ConfigurationError::NonPositiveDivisor { side: "quote" });
            }
            Asset::new(
                asset.amount() * self.base.amount() / self.quote.amount(),
                self.base.symbol(),
            )
        } else {
            Err(ConfigurationError::UnrelatedConversion {
                asset: asset.to_string(),
                price: self.to_string(),
            })
        }
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.base, self.quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetSymbol;

    fn asset(amount: f64, symbol: AssetSymbol) -> Asset {
        Asset::new(amount, symbol).expect("valid asset")
    }

    #[test]
    fn rejects_zero_legs() {
        let err = Price::new(asset(0.0, AssetSymbol::Hive), asset(1.0, AssetSymbol::Hbd))
            .expect_err("must fail");
        assert!(matches!(err, ConfigurationError::ZeroPriceLeg));
    }

    #[test]
    fn rejects_same_symbol_pair() {
        let err = Price::new(asset(1.0, AssetSymbol::Hive), asset(2.0, AssetSymbol::Hive))
            .expect_err("must fail");
        assert!(matches!(err, ConfigurationError::SameSymbolPrice { .. }));
    }

    #[test]
    fn converts_base_to_quote() {
        let price = Price::new(asset(1.0, AssetSymbol::Hive), asset(0.250, AssetSymbol::Hbd))
            .expect("valid price");
        let converted = price
            .convert(&asset(4.0, AssetSymbol::Hive))
            .expect("base side");
        assert_eq!(converted, asset(1.0, AssetSymbol::Hbd));
    }

    #[test]
    fn converts_quote_to_base() {
        let price = Price::new(asset(1.0, AssetSymbol::Hive), asset(0.250, AssetSymbol::Hbd))
            .expect("valid price");
        let converted = price
            .convert(&asset(1.0, AssetSymbol::Hbd))
            .expect("quote side");
        assert_eq!(converted, asset(4.0, AssetSymbol::Hive));
    }

    #[test]
    fn rejects_unrelated_symbol() {
        let price = Price::new(asset(1.0, AssetSymbol::Hive), asset(0.250, AssetSymbol::Hbd))
            .expect("valid price");
        let err = price
            .convert(&asset(1.0, AssetSymbol::Vests))
            .expect_err("must fail");
        assert!(matches!(err, ConfigurationError::UnrelatedConversion { .. }));
    }
}
