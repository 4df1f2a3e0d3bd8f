// ----- standard library imports
use std::str::FromStr;
// ----- extra library imports
use ethers_core::types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
// ----- local imports

// ----- end imports

/// digits in `U256::MAX`
const MAX_DIGITS: usize = 78;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
    #[error("{0} is not a number")]
    NotANumber(String),
    #[error("{0} is not a whole amount of base units")]
    Fractional(String),
    #[error("{0} exceeds the uint256 range")]
    Overflow(String),
}

/// Token amount in base units, covering the full uint256 range.
///
/// Travels as a decimal string. Parsing also accepts scientific notation
/// (`1e18`, `1.5E+30`) as long as the result is a whole number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(pub U256);

impl Amount {
    pub const ZERO: Self = Self(U256([0; 4]));
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let not_a_number = || AmountParseError::NotANumber(String::from(raw));
        let (mantissa, exponent) = match raw.find(['e', 'E']) {
            Some(idx) => {
                let exp = &raw[idx + 1..];
                let exp = exp.strip_prefix('+').unwrap_or(exp);
                if exp.is_empty() || !exp.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(not_a_number());
                }
                // anything this long overflows unless the mantissa is zero
                let exp = exp.parse::<usize>().unwrap_or(usize::MAX);
                (&raw[..idx], exp)
            }
            None => (raw, 0),
        };
        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !is_digits(int_part)
            || !is_digits(frac_part)
        {
            return Err(not_a_number());
        }

        let frac_part = frac_part.trim_end_matches('0');
        let digits = format!("{int_part}{frac_part}");
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(Self::ZERO);
        }
        if frac_part.len() > exponent {
            return Err(AmountParseError::Fractional(String::from(raw)));
        }
        let zeros = exponent - frac_part.len();
        if digits.len().saturating_add(zeros) > MAX_DIGITS {
            return Err(AmountParseError::Overflow(String::from(raw)));
        }
        let whole = format!("{digits}{}", "0".repeat(zeros));
        U256::from_dec_str(&whole)
            .map(Self)
            .map_err(|_| AmountParseError::Overflow(String::from(raw)))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Amount::from_str(&raw).map_err(serde::de::Error::custom)
    }
}
