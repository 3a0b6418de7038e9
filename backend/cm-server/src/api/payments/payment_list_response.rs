use crate::PaymentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PaymentListResponse {
    pub payments: Vec<PaymentDto>,
}
