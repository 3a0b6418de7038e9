use crate::DocumentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentDto>,
}
