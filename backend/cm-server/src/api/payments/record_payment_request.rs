use serde::Deserialize;

/// Body of POST /payments/{id}/record - marks the payment settled
#[derive(Debug, Deserialize, Default)]
pub struct RecordPaymentRequest {
    /// How it was settled ("cash", "transfer", ...)
    #[serde(default)]
    pub method: Option<String>,
}
