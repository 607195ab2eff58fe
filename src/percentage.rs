use crate::fraction::Fraction;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display};
use std::ops::Add;

/// A rate stat displayed with `PRECISION` decimal places.
///
/// A zero denominator yields zero rather than NaN, so a player without a plate appearance shows
/// ".000" everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pct<const PRECISION: u8>(pub Fraction);

impl<const PRECISION: u8> Pct<PRECISION> {
    pub fn new(numerator: u64, denominator: u64) -> Pct<PRECISION> {
        Pct(Fraction::new(numerator, denominator).unwrap_or_default())
    }

    /// The value as it is displayed, so that sums of rounded rates add up on screen.
    pub fn rounded(self) -> Pct<PRECISION> {
        Pct(self.0.round_to(PRECISION.into()))
    }
}

impl<const PRECISION: u8> Add for Pct<PRECISION> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Pct(self.0 + other.0)
    }
}

impl<const PRECISION: u8> Display for Pct<PRECISION> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", usize::from(PRECISION), self.0)
    }
}

impl<const PRECISION: u8> Serialize for Pct<PRECISION> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
