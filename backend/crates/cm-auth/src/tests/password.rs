use crate::{hash_password, verify_password};

#[test]
fn given_correct_password_when_verified_then_true() {
    let hash = hash_password("correct horse battery staple").unwrap();

    assert!(verify_password("correct horse battery staple", &hash).unwrap());
}

#[test]
fn given_wrong_password_when_verified_then_false() {
    let hash = hash_password("correct horse battery staple").unwrap();

    assert!(!verify_password("tr0ub4dor&3", &hash).unwrap());
}

#[test]
fn given_same_password_when_hashed_twice_then_hashes_differ() {
    // Fresh salt per hash
    let first = hash_password("pw").unwrap();
    let second = hash_password("pw").unwrap();

    assert_ne!(first, second);
}

#[test]
fn given_malformed_stored_hash_when_verified_then_error() {
    assert!(verify_password("pw", "not-a-phc-string").is_err());
}
