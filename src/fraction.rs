use gcd::Gcd;
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Add, Mul};

/// An exact non-negative ratio, always kept in lowest terms with a non-zero denominator.
///
/// Rates are built from `u32` counting stats and rounded to thousandths before they are summed, so
/// the `u128` products below stay far from overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: u128,
    denom: u128,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numer: 0, denom: 1 };

    /// `None` when `denom` is zero.
    pub fn new(numer: u64, denom: u64) -> Option<Fraction> {
        (denom != 0).then(|| Fraction::reduced(numer.into(), denom.into()))
    }

    fn reduced(numer: u128, denom: u128) -> Fraction {
        let gcd = numer.gcd(denom);
        Fraction {
            numer: numer / gcd,
            denom: denom / gcd,
        }
    }

    pub fn to_f64(self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Rounds to the nearest integer, halves away from zero.
    pub fn round(self) -> u128 {
        let quo = self.numer / self.denom;
        let rem = self.numer % self.denom;
        if rem * 2 >= self.denom {
            quo + 1
        } else {
            quo
        }
    }

    /// Rounds to `precision` decimal places.
    pub fn round_to(self, precision: u32) -> Fraction {
        let mult = 10_u128.pow(precision);
        Fraction::reduced((self * Fraction::from(mult)).round(), mult)
    }
}

impl Default for Fraction {
    fn default() -> Fraction {
        Fraction::ZERO
    }
}

impl From<u128> for Fraction {
    fn from(numer: u128) -> Fraction {
        Fraction { numer, denom: 1 }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Fraction) -> Fraction {
        // a/b + c/d = (a(l/b) + c(l/d))/l with l = lcm(b, d)
        let lcm = self.denom / self.denom.gcd(other.denom) * other.denom;
        Fraction::reduced(
            self.numer * (lcm / self.denom) + other.numer * (lcm / other.denom),
            lcm,
        )
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, other: Fraction) -> Fraction {
        Fraction::reduced(self.numer * other.numer, self.denom * other.denom)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Fraction) -> Ordering {
        (self.numer * other.denom).cmp(&(other.numer * self.denom))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Formats with `precision` decimal places (default 3). The integer part is dropped when it is
/// zero (".347") unless the alternate flag is set ("0.347").
impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let leading_zero = f.alternate();
        let precision = f.precision().unwrap_or(3);

        let mult = 10_u128.pow(u32::try_from(precision).map_err(|_| fmt::Error)?);
        let x = (*self * Fraction::from(mult)).round();
        let trunc = x / mult;
        if leading_zero || trunc != 0 {
            write!(f, "{}", trunc)?;
        }
        if precision > 0 {
            write!(f, ".{:0>width$}", x % mult, width = precision)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Fraction;
    use proptest::prelude::*;

    macro_rules! f {
        ($n:expr, $d:expr) => {
            Fraction::new($n, $d).unwrap()
        };
    }

    macro_rules! eq {
        ($oper:tt, $a:expr, $b:expr, $c:expr, $d:expr) => {{
            let frac = (f!($a.into(), $b.into()) $oper f!($c.into(), $d.into())).to_f64();
            let float = ($a as f64 / $b as f64) $oper ($c as f64 / $d as f64);
            float_cmp::assert_approx_eq!(f64, frac, float, epsilon = 0.00000003, ulps = 2);
        }};
    }

    proptest! {
        #[test]
        fn add(a: u16, b in 1_u16.., c: u16, d in 1_u16..) {
            eq!(+, a, b, c, d);
        }

        #[test]
        fn mul(a in 0_u32..1000, b in 1_u32..1000, c in 0_u32..1000, d in 1_u32..1000) {
            eq!(*, a, b, c, d);
        }

        #[test]
        fn ordering_agrees_with_f64(a: u16, b in 1_u16.., c: u16, d in 1_u16..) {
            let (x, y) = (f!(a.into(), b.into()), f!(c.into(), d.into()));
            let (fx, fy) = (f64::from(a) / f64::from(b), f64::from(c) / f64::from(d));
            if fx < fy {
                prop_assert!(x < y);
            } else if fx > fy {
                prop_assert!(x > y);
            }
        }
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(Fraction::new(3, 0), None);
        assert_eq!(Fraction::new(0, 0), None);
        assert_eq!(Fraction::new(0, 5), Some(Fraction::ZERO));
    }

    #[test]
    fn reduce() {
        assert_eq!(f!(4, 2), f!(2, 1));
        assert_eq!(f!(2500, 15), f!(500, 3));
        assert_eq!(f!(777, 21), f!(111, 3));
    }

    #[test]
    fn round() {
        assert_eq!(f!(249, 100).round(), 2);
        assert_eq!(f!(250, 100).round(), 3);
        assert_eq!(f!(251, 100).round(), 3);
        assert_eq!(f!(252, 101).round(), 2);
        assert_eq!(f!(253, 101).round(), 3);
        assert_eq!(f!(4, 11).round_to(3), f!(364, 1000));
        assert_eq!(f!(1, 16).round_to(3), f!(63, 1000));
    }

    #[test]
    fn display() {
        assert_eq!(f!(347, 1000).to_string(), ".347");
        assert_eq!(f!(4, 11).to_string(), ".364");
        assert_eq!(f!(1024, 1000).to_string(), "1.024");
        assert_eq!(Fraction::ZERO.to_string(), ".000");
        assert_eq!(f!(1, 1).to_string(), "1.000");
        assert_eq!(f!(9999, 10000).to_string(), "1.000");
        assert_eq!(format!("{:#}", f!(1, 3)), "0.333");
        assert_eq!(format!("{:.1}", f!(1, 3)), ".3");
        assert_eq!(format!("{:.0}", f!(5, 2)), "3");
    }
}
