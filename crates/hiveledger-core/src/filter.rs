use serde::{Deserialize, Serialize};

use crate::catalog;

/// 128-bit operation selection bitset split into two 64-bit words.
///
/// Ordinal `k < 64` sets bit `k` of the low word, `k >= 64` sets bit
/// `k - 64` of the high word. A word that ends up all-zero is carried as
/// `None` instead of a literal zero: the condenser wire contract treats an
/// absent bound as "no restriction on that half", and this quirk must be
/// preserved exactly. Nothing outside this type should depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterMask {
    pub low: Option<u64>,
    pub high: Option<u64>,
}

impl FilterMask {
    /// Build a mask from a set of catalog ordinals.
    ///
    /// Pure and order-independent: the result depends only on the ordinal
    /// set, duplicates have no effect beyond the first. Ordinals outside
    /// `[0, 127]` are a caller contract violation; the catalog is the only
    /// valid ordinal source.
    pub fn build(ordinals: impl IntoIterator<Item = u8>) -> Self {
        let (mut low, mut high) = (0_u64, 0_u64);
        for ordinal in ordinals {
            if ordinal < 64 {
                low |= 1_u64 << ordinal;
            } else {
                high |= 1_u64 << (ordinal - 64);
            }
        }

        Self {
            low: (low != 0).then_some(low),
            high: (high != 0).then_some(high),
        }
    }

    /// Mask selecting every catalog operation, used by the bootstrap call
    /// that resolves an account's most recent history index.
    pub fn all() -> Self {
        Self::build(catalog::all_ordinals())
    }

    /// Mask selecting the financially relevant export operations.
    pub fn export() -> Self {
        Self::build(catalog::export_ordinals())
    }
}
