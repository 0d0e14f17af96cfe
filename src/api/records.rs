use serde::{Deserialize, Deserializer};

/// Invoice as returned by the `invoices` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    pub date: String,
    #[serde(deserialize_with = "number_or_string")]
    pub amount: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub total_taxes: f64,
}

/// Expense as returned by the `expenses` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Expense {
    pub date: String,
    #[serde(deserialize_with = "number_or_string")]
    pub amount: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub tax_rate1: f64,
}

/// Envelope around every collection response
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Collection<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

// The API emits amounts as JSON numbers or as decimal strings depending on version
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount '{s}'"))),
    }
}
