use contracts::domain::a001_laundry_transaction::{
    ApiErrorBody, Transaction, TransactionListResponse,
};
use gloo_net::http::Request;
use thiserror::Error;

use crate::config::config;

/// Shown for anything that is not a clean API answer
pub const GENERIC_LOAD_ERROR: &str = "Terjadi kesalahan saat mengambil data transaksi";

#[derive(Debug, Error, PartialEq)]
pub enum TransactionsError {
    /// Server answered with a non-OK status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Network(String),

    /// Body is not the JSON the status calls for
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl TransactionsError {
    /// Text for the error alert
    pub fn user_message(&self) -> String {
        match self {
            TransactionsError::Api { status, message } => {
                let detail = message
                    .as_deref()
                    .filter(|m| !m.trim().is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("HTTP {}", status));
                format!("Error fetching transactions: {}", detail)
            }
            TransactionsError::Network(_) | TransactionsError::Decode(_) => {
                GENERIC_LOAD_ERROR.to_string()
            }
        }
    }
}

/// Keeps only finished orders
pub fn retain_completed(mut records: Vec<Transaction>) -> Vec<Transaction> {
    records.retain(Transaction::is_completed);
    records
}

/// Turns a finished HTTP exchange into the list of all records.
/// Status filtering is left to the caller.
pub fn interpret_response(
    ok: bool,
    status: u16,
    body: &str,
) -> Result<Vec<Transaction>, TransactionsError> {
    if !ok {
        // Valid JSON without a message still counts as an API answer
        let error_body: ApiErrorBody =
            serde_json::from_str(body).map_err(|e| TransactionsError::Decode(e.to_string()))?;
        return Err(TransactionsError::Api {
            status,
            message: error_body.message,
        });
    }

    let parsed: TransactionListResponse =
        serde_json::from_str(body).map_err(|e| TransactionsError::Decode(e.to_string()))?;
    Ok(parsed.data)
}

/// Fetch every transaction from the backend
pub async fn fetch_transactions() -> Result<Vec<Transaction>, TransactionsError> {
    let url = config().transactions_url();
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| TransactionsError::Network(e.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|e| TransactionsError::Network(e.to_string()))?;

    interpret_response(response.ok(), response.status(), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, status: &str) -> String {
        format!(
            r#"{{"id": {id}, "nama_pelanggan": "Pelanggan {id}", "nomor_telepon": "08{id}", "nama_layanan": "Cuci", "total_harga": 12000, "created_at": "2024-02-0{d}", "status": "{status}"}}"#,
            d = id % 9 + 1
        )
    }

    #[test]
    fn test_retains_only_completed() {
        let mut rows: Vec<String> = (1..=7).map(|id| record(id, "Selesai")).collect();
        rows.insert(2, record(8, "Proses"));
        rows.push(record(9, "Dijemput"));
        let body = format!(r#"{{"data": [{}]}}"#, rows.join(","));

        let all = interpret_response(true, 200, &body).unwrap();
        assert_eq!(all.len(), 9);

        let completed = retain_completed(all);
        assert_eq!(completed.len(), 7);
        assert!(completed.iter().all(Transaction::is_completed));
        let ids: Vec<String> = completed.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_non_ok_without_message_uses_fallback() {
        let err = interpret_response(false, 500, r#"{"data": []}"#).unwrap_err();
        assert_eq!(
            err,
            TransactionsError::Api {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.user_message(), "Error fetching transactions: HTTP 500");
    }

    #[test]
    fn test_non_ok_with_server_message() {
        let err = interpret_response(false, 404, r#"{"message": "Data tidak ditemukan"}"#)
            .unwrap_err();
        assert_eq!(
            err.user_message(),
            "Error fetching transactions: Data tidak ditemukan"
        );
    }

    #[test]
    fn test_non_ok_with_non_json_body_is_generic() {
        let err = interpret_response(false, 502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, TransactionsError::Decode(_)));
        assert_eq!(err.user_message(), GENERIC_LOAD_ERROR);

        let err = interpret_response(false, 500, "").unwrap_err();
        assert_eq!(err.user_message(), GENERIC_LOAD_ERROR);
    }

    #[test]
    fn test_ok_with_unexpected_body_is_generic() {
        let err = interpret_response(true, 200, r#"{"message": "ok"}"#).unwrap_err();
        assert!(matches!(err, TransactionsError::Decode(_)));
        assert_eq!(err.user_message(), GENERIC_LOAD_ERROR);

        let err = interpret_response(true, 200, "not json").unwrap_err();
        assert_eq!(err.user_message(), GENERIC_LOAD_ERROR);
    }

    #[test]
    fn test_network_error_is_generic() {
        let err = TransactionsError::Network("Failed to fetch".to_string());
        assert_eq!(err.user_message(), GENERIC_LOAD_ERROR);
    }
}
