//! Card brand tags.
//!
//! `BrandTag` is the closed set of card networks the classifier can report.
//! Each tag also carries the display rules the formatter needs: the digit
//! grouping and the maximum printed length.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseBrandError;

/// Card network detected from the leading digits of a card number.
///
/// `Unknown` is the sentinel for "no pattern matched" and has the empty
/// string as its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrandTag {
    /// Visa - prefix 4
    Visa,
    /// Mastercard - prefix 51-55, 2221-2720
    Mastercard,
    /// American Express - prefix 34, 37
    Amex,
    /// Discover - prefix 6011, 622126-622925, 644-649, 65
    Discover,
    /// JCB - prefix 35
    Jcb,
    /// Diners Club - prefix 300-305, 36, 38
    Diners,
    /// No known prefix matched.
    #[default]
    Unknown,
}

/// Every tag, in classifier priority order.
pub const ALL_BRANDS: [BrandTag; 7] = [
    BrandTag::Visa,
    BrandTag::Mastercard,
    BrandTag::Amex,
    BrandTag::Discover,
    BrandTag::Jcb,
    BrandTag::Diners,
    BrandTag::Unknown,
];

const AMEX_GROUPS: &[usize] = &[4, 6, 5];
const STANDARD_GROUPS: &[usize] = &[4, 4, 4, 4];

impl BrandTag {
    /// Returns the lowercase wire tag (`"visa"`, `"amex"`, ...).
    ///
    /// `Unknown` maps to the empty string.
    #[inline]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::Jcb => "jcb",
            Self::Diners => "diners",
            Self::Unknown => "",
        }
    }

    /// Returns a human-readable name for the brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::Diners => "Diners Club",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for every tag except `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Digit group sizes used when rendering a number of this brand.
    #[inline]
    pub const fn group_sizes(&self) -> &'static [usize] {
        match self {
            Self::Amex => AMEX_GROUPS,
            _ => STANDARD_GROUPS,
        }
    }

    /// Maximum number of digits shown in the display string.
    #[inline]
    pub const fn max_display_digits(&self) -> usize {
        match self {
            Self::Amex => 15,
            _ => 16,
        }
    }

    /// Maximum length of the space-separated display string.
    ///
    /// 17 for Amex (`4+1+6+1+5`), 19 for everything else (`4*4+3`).
    #[inline]
    pub const fn max_display_len(&self) -> usize {
        self.max_display_digits() + self.group_sizes().len() - 1
    }
}

impl fmt::Display for BrandTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BrandTag {
    type Err = ParseBrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" | "mc" => Ok(Self::Mastercard),
            "amex" | "american express" => Ok(Self::Amex),
            "discover" => Ok(Self::Discover),
            "jcb" => Ok(Self::Jcb),
            "diners" | "dinersclub" | "diners club" => Ok(Self::Diners),
            "" | "unknown" => Ok(Self::Unknown),
            _ => Err(ParseBrandError::new(s)),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BrandTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BrandTag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
