use crate::{Document, DocumentCategory, DocumentStatus};

use chrono::NaiveDate;
use uuid::Uuid;

fn medical_certificate() -> Document {
    Document::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "Certificato Medico".to_string(),
        DocumentCategory::Medical,
    )
}

#[test]
fn test_document_without_expiry_has_no_expiry_status() {
    let doc = medical_certificate();
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert_eq!(doc.status(today), DocumentStatus::NoExpiry);
}

#[test]
fn test_document_past_expiry_is_expired() {
    let mut doc = medical_certificate();
    doc.expires_at = NaiveDate::from_ymd_opt(2026, 2, 1);
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert_eq!(doc.status(today), DocumentStatus::Expired);
}

#[test]
fn test_document_inside_warning_window_is_expiring() {
    let mut doc = medical_certificate();
    doc.expires_at = NaiveDate::from_ymd_opt(2026, 3, 20);
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert_eq!(doc.status(today), DocumentStatus::Expiring);
}

#[test]
fn test_document_far_from_expiry_is_valid() {
    let mut doc = medical_certificate();
    doc.expires_at = NaiveDate::from_ymd_opt(2026, 9, 1);
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert_eq!(doc.status(today), DocumentStatus::Valid);
}

#[test]
fn test_document_expiring_boundary_is_inclusive() {
    let mut doc = medical_certificate();
    // Exactly 30 days out
    doc.expires_at = NaiveDate::from_ymd_opt(2026, 3, 31);
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert_eq!(doc.status(today), DocumentStatus::Expiring);
}
