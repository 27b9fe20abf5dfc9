use crate::serializable_struct_with_getters;
use basket_utils::Price;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::Display;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    #[default]
    Knapsack,
}

impl Algorithm {
    /// Unrecognised names fall back to the knapsack optimizer.
    pub fn from_name(name: &str) -> Self {
        match name {
            "bfs" => Algorithm::Bfs,
            "dfs" => Algorithm::Dfs,
            _ => Algorithm::Knapsack,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Knapsack => "knapsack",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Body of `POST /optimize`.
///
/// Fields are coerced rather than validated: anything that cannot be read as a number is
/// replaced by the default, negative budgets become zero, and an unknown algorithm selects the
/// knapsack optimizer.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct OptimizeReq {
    pub max_weight: u32,
    pub max_price: Price,
    pub algorithm: Algorithm,
}

impl OptimizeReq {
    pub const DEFAULT_MAX_WEIGHT: u32 = 10;
    pub const DEFAULT_MAX_PRICE: f64 = 20.0;

    pub fn from_payload(payload: &Value) -> Self {
        Self {
            max_weight: coerce_weight(payload.get("max_weight"))
                .unwrap_or(Self::DEFAULT_MAX_WEIGHT),
            max_price: Price::from_f64(
                coerce_price(payload.get("max_price")).unwrap_or(Self::DEFAULT_MAX_PRICE),
            ),
            algorithm: match payload.get("algorithm") {
                Some(Value::String(name)) => Algorithm::from_name(name),
                _ => Algorithm::default(),
            },
        }
    }
}

impl Default for OptimizeReq {
    fn default() -> Self {
        Self::from_payload(&Value::Null)
    }
}

impl<'de> Deserialize<'de> for OptimizeReq {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let payload = Value::deserialize(deserializer)?;
        Ok(Self::from_payload(&payload))
    }
}

fn clamp_to_u32(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value.trunc() as u32
    }
}

fn coerce_weight(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                Some(v.min(u32::MAX as u64) as u32)
            } else if n.as_i64().is_some() {
                Some(0)
            } else {
                n.as_f64().filter(|v| v.is_finite()).map(clamp_to_u32)
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .map(|v| v.clamp(0, u32::MAX as i64) as u32),
        _ => None,
    }
}

fn coerce_price(value: Option<&Value>) -> Option<f64> {
    let price = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if price.is_finite() {
        Some(price.max(0.0))
    } else {
        None
    }
}

serializable_struct_with_getters! {
    ErrorResp {
        error: String,
    }
}

impl ErrorResp {
    pub fn new<T: Display>(error: T) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
