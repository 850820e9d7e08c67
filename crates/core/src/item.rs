//! The `Item` record accepted by the create/update endpoints.

use core::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// An item as submitted in a request body.
///
/// Lives for one request: decoded, echoed back in part, dropped.
/// Unknown JSON fields are ignored. The decimal fields take a JSON number
/// (integer or float) or a string holding a finite number (`"9.99"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "lax_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lax_f64_opt")]
    pub tax: Option<f64>,
}

/// A decimal read from a JSON number or a numeric string.
#[derive(Debug, Copy, Clone, PartialEq)]
struct LaxF64(f64);

struct LaxF64Visitor;

impl<'de> Visitor<'de> for LaxF64Visitor {
    type Value = LaxF64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string containing a finite number")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(LaxF64(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(LaxF64(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(LaxF64(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(LaxF64(n)),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for LaxF64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LaxF64Visitor)
    }
}

fn lax_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    LaxF64::deserialize(deserializer).map(|v| v.0)
}

fn lax_f64_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Option::<LaxF64>::deserialize(deserializer).map(|v| v.map(|v| v.0))
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            tax: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = Some(tax);
        self
    }

    /// Decode an item from a JSON body and validate it.
    pub fn from_json(bytes: &[u8]) -> DomainResult<Self> {
        let item: Self = serde_json::from_slice(bytes)?;
        item.validate()?;
        Ok(item)
    }

    /// Check the invariants serde cannot express.
    ///
    /// JSON has no NaN/Infinity, so decoded items always pass; this guards
    /// items built in code.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.price.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if let Some(tax) = self.tax {
            if !tax.is_finite() {
                return Err(DomainError::validation("tax must be a finite number"));
            }
        }
        Ok(())
    }
}
