use super::*;

/// Tests that storing claims returns an augmented copy and leaves the original untouched.
///
/// Expected: claims present on the copy only
#[test]
fn with_claims_returns_copy() {
    let original = RequestContext::default();
    let stored = claims(Some(1), Duration::hours(1));

    let augmented = original.with_claims(stored.clone()).unwrap();

    assert!(original.claims().is_none());
    assert_eq!(augmented.claims(), Some(&stored));
}

/// Tests that claims can only be written once per request.
///
/// Expected: Err(InternalError::ContextKeyRewritten("claims"))
#[test]
fn claims_are_write_once() {
    let ctx = RequestContext::default()
        .with_claims(claims(Some(1), Duration::hours(1)))
        .unwrap();

    let result = ctx.with_claims(claims(Some(2), Duration::hours(1)));

    assert!(matches!(
        result,
        Err(InternalError::ContextKeyRewritten("claims"))
    ));
    assert_eq!(ctx.claims().and_then(|claims| claims.school_id), Some(1));
}
