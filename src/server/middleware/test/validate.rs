use super::*;

thread_local! {
    /// Keys of the validators that ran on this thread, in call order.
    static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn calls() -> Vec<&'static str> {
    CALLS.with(|calls| calls.borrow().clone())
}

fn reset_calls() {
    CALLS.with(|calls| calls.borrow_mut().clear());
}

/// Defines a validator recording its call and returning the named field.
macro_rules! field_validator {
    ($name:ident, $key:literal, $field:literal) => {
        struct $name;

        impl Validator for $name {
            const KEY: &'static str = $key;
            type Output = String;

            fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<String> {
                CALLS.with(|calls| calls.borrow_mut().push($key));
                form.required($field, concat!($field, " not provided"))
            }
        }
    };
}

field_validator!(First, "first", "a");
field_validator!(Second, "second", "b");
field_validator!(Third, "third", "c");
field_validator!(SecondAgain, "second", "c");

/// Tests that every validator runs, in order, when all of them accept the form.
///
/// Expected: Ok with the outputs in chain order
#[test]
fn runs_validators_in_order() {
    reset_calls();
    let form = RawForm::parse(b"a=1&b=2&c=3");

    let output = <(First, Second, Third)>::run(&form, &RequestContext::default()).unwrap();

    assert_eq!(output, ("1".to_string(), "2".to_string(), "3".to_string()));
    assert_eq!(calls(), vec!["first", "second", "third"]);
}

/// Tests that the chain stops at the first failing validator.
///
/// Expected: Err naming the failing validator, later validators never called
#[test]
fn stops_at_first_failure() {
    reset_calls();
    let form = RawForm::parse(b"a=1&c=3");

    let failure = <(First, Second, Third)>::run(&form, &RequestContext::default()).unwrap_err();

    assert_eq!(failure.key, "second");
    assert_eq!(failure.error.message(), "b not provided");
    assert_eq!(calls(), vec!["first", "second"]);
}

/// Tests that a failing first validator prevents every other call.
///
/// Expected: Err from the first validator, exactly one call
#[test]
fn failing_first_validator_runs_alone() {
    reset_calls();
    let form = RawForm::parse(b"b=2&c=3");

    let failure = <(First, Second, Third)>::run(&form, &RequestContext::default()).unwrap_err();

    assert_eq!(failure.key, "first");
    assert_eq!(calls(), vec!["first"]);
}

/// Tests that running a chain twice over the same form gives the same outcome.
///
/// Expected: equal outputs and equal failures
#[test]
fn same_form_same_outcome() {
    let ctx = RequestContext::default();
    let accepted = RawForm::parse(b"a=1&b=2");
    let rejected = RawForm::parse(b"a=1");

    assert_eq!(
        <(First, Second)>::run(&accepted, &ctx).unwrap(),
        <(First, Second)>::run(&accepted, &ctx).unwrap()
    );
    assert_eq!(
        <(First, Second)>::run(&rejected, &ctx).unwrap_err().key,
        <(First, Second)>::run(&rejected, &ctx).unwrap_err().key
    );
}

/// Tests that a chain using one key twice is rejected.
///
/// Expected: Err(InternalError::DuplicateValidatorKey("second"))
#[test]
fn rejects_duplicate_keys() {
    let keys = <(First, Second, SecondAgain)>::keys();

    assert!(matches!(
        ensure_unique_keys(&keys),
        Err(InternalError::DuplicateValidatorKey("second"))
    ));
    assert!(ensure_unique_keys(&<(First, Second, Third)>::keys()).is_ok());
}

/// Validator reading the caller's school from the context.
struct SchoolFromClaims;

impl Validator for SchoolFromClaims {
    const KEY: &'static str = "school_from_claims";
    type Output = i32;

    fn validate(_form: &RawForm, ctx: &RequestContext) -> ParseOutcome<i32> {
        ctx.claims()
            .and_then(|claims| claims.school_id)
            .ok_or_else(|| ParseError::new("User doesn't belong to a school"))
    }
}

/// Tests that validators see values stored in the context by earlier stages.
///
/// Expected: Ok with the school id from the claims
#[test]
fn reads_values_from_context() {
    let form = RawForm::parse(b"");
    let ctx = RequestContext::default()
        .with_claims(claims(Some(4), Duration::hours(1)))
        .unwrap();

    assert_eq!(<(SchoolFromClaims,)>::run(&form, &ctx).unwrap(), (4,));
    assert!(<(SchoolFromClaims,)>::run(&form, &RequestContext::default()).is_err());
}

async fn echo(Validated((a, b)): Validated<(First, Second)>) -> String {
    format!("{a}{b}")
}

async fn misconfigured(Validated(_): Validated<(First, Second, SecondAgain)>) -> StatusCode {
    StatusCode::OK
}

fn form_request(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// Tests that the extractor hands the validated outputs to the handler.
///
/// Expected: 200 with the concatenated fields
#[tokio::test]
async fn extractor_passes_outputs_to_handler() {
    let app = Router::new().route("/", post(echo));

    let response = app.oneshot(form_request("/", "a=x&b=y")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response.into_body()).await, "xy");
}

/// Tests that a rejected form answers 400 with the failing validator's message.
///
/// Expected: 400 with `{"error":"b not provided"}`
#[tokio::test]
async fn extractor_rejects_with_message() {
    let app = Router::new().route("/", post(echo));

    let response = app.oneshot(form_request("/", "a=x")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(response.into_body()).await,
        r#"{"error":"b not provided"}"#
    );
}

/// Tests that a chain with duplicate keys never runs.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn extractor_rejects_duplicate_keys() {
    let app = Router::new().route("/", post(misconfigured));

    let response = app.oneshot(form_request("/", "a=x&b=y&c=z")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
