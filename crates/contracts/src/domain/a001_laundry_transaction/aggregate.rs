use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Status value the backend uses for a finished laundry order.
pub const COMPLETED_STATUS: &str = "Selesai";

// ============================================================================
// ID Type
// ============================================================================

/// Transaction identifier.
///
/// The backend sends either a numeric primary key or a string code, so any
/// JSON number or string is accepted; `null` becomes an empty code.
/// Search and row keys always work on the textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Number(serde_json::Number),
    Text(String),
}

impl Default for TransactionId {
    fn default() -> Self {
        TransactionId::Text(String::new())
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Number(n) => write_number(f, n),
            TransactionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TransactionId {
    fn from(value: i64) -> Self {
        TransactionId::Number(serde_json::Number::from(value))
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        TransactionId::Text(value.to_string())
    }
}

// ============================================================================
// Value objects
// ============================================================================

/// Total price as sent by the backend, displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Number(serde_json::Number::from(0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write_number(f, n),
            Price::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Price::Number(serde_json::Number::from(value))
    }
}

/// Raw status string of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionStatus(pub String);

impl TransactionStatus {
    pub fn completed() -> Self {
        Self(COMPLETED_STATUS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact match against [`COMPLETED_STATUS`], no case folding.
    pub fn is_completed(&self) -> bool {
        self.0 == COMPLETED_STATUS
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Record
// ============================================================================

/// One laundry transaction as listed by `GET /transaksi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: TransactionId,

    #[serde(rename = "nama_pelanggan", default, deserialize_with = "null_as_default")]
    pub customer_name: String,

    #[serde(rename = "nomor_telepon", default, deserialize_with = "null_as_default")]
    pub phone_number: String,

    #[serde(rename = "nama_layanan", default, deserialize_with = "null_as_default")]
    pub service_name: String,

    #[serde(rename = "total_harga", default, deserialize_with = "null_as_default")]
    pub total_price: Price,

    /// Kept as sent; the list shows it without reformatting.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

// ============================================================================
// Envelopes
// ============================================================================

/// Successful list response: `{ "data": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub data: Vec<Transaction>,
}

/// Body of a failed request. The message is optional and may be missing entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Shortest form, so a float with no fraction prints like an integer
/// (`25000.0` shows as `25000`).
fn write_number(f: &mut fmt::Formatter<'_>, n: &serde_json::Number) -> fmt::Result {
    if n.is_f64() {
        if let Some(v) = n.as_f64() {
            if v.fract() == 0.0 && v.abs() < 1e21 {
                return write!(f, "{:.0}", v);
            }
            return write!(f, "{}", v);
        }
    }
    write!(f, "{}", n)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
