use crate::DocumentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: DocumentDto,
}
