//! Transaction rows as returned by the sales endpoint.
//!
//! The dashboard treats a row as an opaque payload. Every field is optional
//! and identifiers or numbers are accepted as JSON strings or numbers, so a
//! row with odd typing still decodes instead of failing the whole page.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One sales transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Database row id, used when `transaction_id` is absent.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Business transaction identifier.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// ISO date of the sale.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Customer identifier.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Customer display name.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Customer phone number.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Customer gender.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Customer age in years.
    #[serde(default, deserialize_with = "lenient_integer", skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    /// Product category.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    /// Units sold.
    #[serde(default, deserialize_with = "lenient_integer", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Amount before discounts.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    /// Amount after discounts.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub final_amount: Option<f64>,
    /// Customer region.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub customer_region: Option<String>,
    /// Product identifier.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Employee who handled the sale.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// Payment method.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl TransactionRecord {
    /// Transaction id, falling back to the row id.
    pub fn display_transaction_id(&self) -> &str {
        self.transaction_id
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or_default()
    }

    /// Final amount, falling back to the total amount.
    pub fn display_final_amount(&self) -> String {
        format_amount(self.final_amount.or(self.total_amount))
    }

    /// Total amount before discounts.
    pub fn display_total_amount(&self) -> String {
        format_amount(self.total_amount)
    }

    /// Non-blank customer name, if any.
    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Renders an optional value for a table cell; missing values are blank.
pub fn display_or_blank<T: ToString>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value.fract() == 0.0 => format!("{value:.0}"),
        Some(value) => format!("{value:.2}"),
        None => String::new(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
