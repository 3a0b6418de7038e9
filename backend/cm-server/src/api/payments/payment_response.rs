use crate::PaymentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub payment: PaymentDto,
}
