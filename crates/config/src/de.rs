//! Lenient deserializers for values that may arrive as numbers or strings.
//!
//! Environment variables such as `MINT_AMOUNT=1000` are parsed as integers by figment.

use serde::{
    Deserialize, Deserializer,
    de::{self, Visitor},
};
use std::fmt;

/// A string, or any number rendered back to its decimal form.
struct Lenient(String);

impl<'de> Deserialize<'de> for Lenient {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientVisitor).map(Self)
    }
}

struct LenientVisitor;

impl Visitor<'_> for LenientVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }
}

pub(crate) fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Lenient::deserialize(deserializer).map(|value| value.0)
}

pub(crate) fn opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<Lenient>::deserialize(deserializer).map(|value| value.map(|value| value.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Amounts {
        #[serde(deserialize_with = "string")]
        amount: String,
        #[serde(default, deserialize_with = "opt_string")]
        key: Option<String>,
    }

    #[test]
    fn accepts_integers_and_strings() {
        let parsed: Amounts = toml::from_str("amount = 42\nkey = 7").unwrap();
        assert_eq!(parsed.amount, "42");
        assert_eq!(parsed.key.as_deref(), Some("7"));

        let parsed: Amounts = toml::from_str(r#"amount = "1.5 ether""#).unwrap();
        assert_eq!(parsed.amount, "1.5 ether");
        assert_eq!(parsed.key, None);

        let parsed: Amounts = toml::from_str("amount = -3").unwrap();
        assert_eq!(parsed.amount, "-3");
    }
}
