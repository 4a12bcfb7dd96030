use serde::{ Deserialize, Serialize };
use std::str::FromStr;
use strum::{ AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator };

use crate::debug_eprint;

/// Maximum width tier of a container, smallest to largest.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr
)]
#[serde(from = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WidthTier {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    #[strum(serialize = "2xl")]
    TwoXl,
    #[serde(rename = "3xl")]
    #[strum(serialize = "3xl")]
    ThreeXl,
    #[serde(rename = "4xl")]
    #[strum(serialize = "4xl")]
    FourXl,
    #[default]
    #[serde(rename = "full")]
    Full,
}

/// Padding tier of a container. `None` emits no padding classes at all.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr
)]
#[serde(from = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PaddingTier {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "sm")]
    Sm,
    #[default]
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
}

impl WidthTier {
    /// Get all width tiers in declaration order
    pub fn all() -> Vec<WidthTier> {
        WidthTier::iter().collect()
    }

    /// Parse a token, falling back to the default tier when it is not recognized
    pub fn from_token(token: &str) -> Self {
        parse_or_default(token, "max-width")
    }
}

impl PaddingTier {
    /// Get all padding tiers in declaration order
    pub fn all() -> Vec<PaddingTier> {
        PaddingTier::iter().collect()
    }

    /// Parse a token, falling back to the default tier when it is not recognized
    pub fn from_token(token: &str) -> Self {
        parse_or_default(token, "padding")
    }
}

fn parse_or_default<T>(token: &str, option: &str) -> T where T: FromStr + Default + std::fmt::Display {
    match token.trim().parse::<T>() {
        Ok(tier) => tier,
        Err(_) => {
            let fallback = T::default();
            debug_eprint!("⚠️ Unknown {} token '{}', using '{}'", option, token, fallback);
            fallback
        }
    }
}

impl From<String> for WidthTier {
    fn from(token: String) -> Self {
        WidthTier::from_token(&token)
    }
}

impl From<String> for PaddingTier {
    fn from(token: String) -> Self {
        PaddingTier::from_token(&token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_full_and_md() {
        assert_eq!(WidthTier::default(), WidthTier::Full);
        assert_eq!(PaddingTier::default(), PaddingTier::Md);
    }

    #[test]
    fn tiers_keep_declaration_order() {
        let widths: Vec<String> = WidthTier::all()
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(widths, ["sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "full"]);

        let paddings: Vec<String> = PaddingTier::all()
            .iter()
            .map(|t| t.as_ref().to_string())
            .collect();
        assert_eq!(paddings, ["none", "sm", "md", "lg", "xl"]);

        assert!(WidthTier::Sm < WidthTier::FourXl);
        assert!(WidthTier::FourXl < WidthTier::Full);
    }

    #[test]
    fn display_and_parse_agree() {
        for tier in WidthTier::all() {
            assert_eq!(tier.to_string().parse::<WidthTier>(), Ok(tier));
        }
        for tier in PaddingTier::all() {
            assert_eq!(tier.to_string().parse::<PaddingTier>(), Ok(tier));
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_strict() {
        assert_eq!("2XL".parse::<WidthTier>(), Ok(WidthTier::TwoXl));
        assert_eq!("None".parse::<PaddingTier>(), Ok(PaddingTier::None));
        assert!("5xl".parse::<WidthTier>().is_err());
        assert!("".parse::<PaddingTier>().is_err());
    }

    #[test]
    fn unknown_tokens_fail_closed() {
        assert_eq!(WidthTier::from_token("huge"), WidthTier::Full);
        assert_eq!(WidthTier::from_token(" 3xl "), WidthTier::ThreeXl);
        assert_eq!(PaddingTier::from_token("xxl"), PaddingTier::Md);
        assert_eq!(PaddingTier::from_token("none"), PaddingTier::None);
    }

    #[test]
    fn serde_uses_tokens_and_falls_back() {
        assert_eq!(serde_json::to_string(&WidthTier::FourXl).unwrap(), "\"4xl\"");
        assert_eq!(serde_json::to_string(&PaddingTier::None).unwrap(), "\"none\"");

        let parsed: WidthTier = serde_json::from_str("\"2xl\"").unwrap();
        assert_eq!(parsed, WidthTier::TwoXl);

        let fallback: PaddingTier = serde_json::from_str("\"gigantic\"").unwrap();
        assert_eq!(fallback, PaddingTier::Md);
    }
}
