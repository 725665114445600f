//! Tests for review submission validation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn valid_body() -> Value {
    json!({
        "serial_no": 1001,
        "review": "  Arrived on time and works as described.  ",
        "status": "PASS",
        "mobile_no": "9876543210",
        "email": "Buyer@Example.COM",
    })
}

fn fields_of(errors: &[FieldError]) -> Vec<&'static str> {
    errors.iter().map(|error| error.field).collect()
}

fn without(mut body: Value, field: &str) -> Value {
    if let Some(map) = body.as_object_mut() {
        map.remove(field);
    }
    body
}

fn with(mut body: Value, field: &str, value: Value) -> Value {
    if let Some(map) = body.as_object_mut() {
        map.insert(field.to_owned(), value);
    }
    body
}

#[rstest]
#[case("1234567890", true)]
#[case("0000000000", true)]
#[case("123456789", false)]
#[case("12345678901", false)]
#[case("12345a7890", false)]
#[case("123456789 ", false)]
#[case("123-456-78", false)]
#[case("١٢٣٤٥٦٧٨٩٠", false)]
#[case("", false)]
fn mobile_number_requires_ten_ascii_digits(#[case] raw: &str, #[case] expected: bool) {
    assert_eq!(is_valid_mobile_number(raw), expected);
}

#[rstest]
#[case("user@example.com", true)]
#[case("first.last@sub.example.co", true)]
#[case("user@", false)]
#[case("user.example.com", false)]
#[case("@example.com", false)]
#[case("user@example", false)]
#[case("us er@example.com", false)]
#[case("user@@example.com", false)]
#[case(" user@example.com", false)]
fn email_requires_local_domain_tld_shape(#[case] raw: &str, #[case] expected: bool) {
    assert_eq!(is_valid_email(raw), expected);
}

#[rstest]
#[case("PASS", true)]
#[case("FAIL", true)]
#[case("pass", false)]
#[case("UNKNOWN", false)]
fn status_is_case_sensitive(#[case] raw: &str, #[case] expected: bool) {
    assert_eq!(is_valid_status(raw), expected);
}

#[rstest]
fn valid_body_has_no_errors(valid_body: Value) {
    assert!(validate_create_request(&valid_body).is_empty());
}

#[rstest]
fn empty_object_reports_every_field() {
    let errors = validate_create_request(&json!({}));
    assert_eq!(
        errors,
        vec![
            FieldError::new(SERIAL_NO, "serial_no is required"),
            FieldError::new(REVIEW, "review is required and must be a non-empty string"),
            FieldError::new(STATUS, "status is required"),
            FieldError::new(MOBILE_NO, "mobile_no is required and must be a string"),
            FieldError::new(EMAIL, "email is required and must be a string"),
        ]
    );
}

#[rstest]
#[case(json!(null))]
#[case(json!([1, 2, 3]))]
#[case(json!("serial_no"))]
#[case(json!(17))]
fn non_object_bodies_report_every_field(#[case] body: Value) {
    assert_eq!(
        fields_of(&validate_create_request(&body)),
        [SERIAL_NO, REVIEW, STATUS, MOBILE_NO, EMAIL]
    );
}

#[rstest]
#[case(vec![SERIAL_NO])]
#[case(vec![REVIEW, EMAIL])]
#[case(vec![STATUS, MOBILE_NO, EMAIL])]
#[case(vec![SERIAL_NO, REVIEW, STATUS, MOBILE_NO, EMAIL])]
fn every_missing_field_is_named(valid_body: Value, #[case] missing: Vec<&'static str>) {
    let body = missing
        .iter()
        .fold(valid_body, |body, field| without(body, field));

    assert_eq!(fields_of(&validate_create_request(&body)), missing);
}

#[rstest]
#[case(json!(null), "serial_no is required")]
#[case(json!("1001"), "serial_no must be a number")]
#[case(json!(true), "serial_no must be a number")]
#[case(json!(10.5), "serial_no must be an integer")]
#[case(json!(9_223_372_036_854_775_808_u64), "serial_no must fit in a signed 64-bit integer")]
#[case(json!(-1.0e19), "serial_no must fit in a signed 64-bit integer")]
fn serial_no_errors(valid_body: Value, #[case] value: Value, #[case] message: &'static str) {
    let errors = validate_create_request(&with(valid_body, SERIAL_NO, value));
    assert_eq!(errors, vec![FieldError::new(SERIAL_NO, message)]);
}

#[rstest]
#[case(json!(0))]
#[case(json!(-3))]
#[case(json!(42.0))]
fn serial_no_accepts_integral_numbers(valid_body: Value, #[case] value: Value) {
    assert!(validate_create_request(&with(valid_body, SERIAL_NO, value)).is_empty());
}

#[rstest]
#[case(json!(""))]
#[case(json!("   \t\n"))]
#[case(json!(12))]
#[case(json!(false))]
#[case(json!(["text"]))]
fn review_must_be_non_blank_text(valid_body: Value, #[case] value: Value) {
    let errors = validate_create_request(&with(valid_body, REVIEW, value));
    assert_eq!(fields_of(&errors), [REVIEW]);
}

#[rstest]
#[case(json!(""), "status is required")]
#[case(json!(0), "status is required")]
#[case(json!(false), "status is required")]
#[case(json!("pass"), "status must be either PASS or FAIL")]
#[case(json!(1), "status must be either PASS or FAIL")]
#[case(json!(true), "status must be either PASS or FAIL")]
fn status_errors(valid_body: Value, #[case] value: Value, #[case] message: &'static str) {
    let errors = validate_create_request(&with(valid_body, STATUS, value));
    assert_eq!(errors, vec![FieldError::new(STATUS, message)]);
}

#[rstest]
#[case(json!(1234567890), "mobile_no is required and must be a string")]
#[case(json!(""), "mobile_no is required and must be a string")]
#[case(json!("12345"), "mobile_no must be exactly 10 digits")]
fn mobile_no_errors(valid_body: Value, #[case] value: Value, #[case] message: &'static str) {
    let errors = validate_create_request(&with(valid_body, MOBILE_NO, value));
    assert_eq!(errors, vec![FieldError::new(MOBILE_NO, message)]);
}

#[rstest]
fn long_emails_are_accepted(valid_body: Value) {
    let email = format!("{}@example.com", "a".repeat(288));
    assert_eq!(email.len(), 300);

    let body = with(valid_body, EMAIL, json!(email));

    assert!(validate_create_request(&body).is_empty());
    let request = parse_and_validate(&body).expect("long email is valid");
    assert_eq!(request.email, email);
}

#[rstest]
#[case(json!({ "address": "user@example.com" }), "email is required and must be a string")]
#[case(json!(null), "email is required and must be a string")]
#[case(json!("user.example.com"), "email must be a valid email format")]
fn email_errors(valid_body: Value, #[case] value: Value, #[case] message: &'static str) {
    let errors = validate_create_request(&with(valid_body, EMAIL, value));
    assert_eq!(errors, vec![FieldError::new(EMAIL, message)]);
}

#[rstest]
fn parse_and_validate_normalises_text_fields() {
    let body = json!({
        "serial_no": 1001,
        "review": "  Arrived on time.  ",
        "status": "FAIL",
        "mobile_no": "9876543210",
        "email": "Buyer@Example.COM",
    });

    let request = parse_and_validate(&body).expect("valid body");

    assert_eq!(
        request,
        NewReview {
            serial_no: 1001,
            review: "Arrived on time.".to_owned(),
            status: ReviewStatus::Fail,
            mobile_no: "9876543210".to_owned(),
            email: "buyer@example.com".to_owned(),
        }
    );
}

#[rstest]
fn parse_and_validate_rejects_untrimmed_email(valid_body: Value) {
    // Surrounding whitespace fails the email pattern before normalisation.
    let body = with(valid_body, EMAIL, json!("  buyer@example.com "));
    assert!(parse_and_validate(&body).is_none());
}

#[rstest]
fn parse_and_validate_returns_none_for_any_failure(valid_body: Value) {
    let body = with(valid_body, STATUS, json!("MAYBE"));
    assert!(parse_and_validate(&body).is_none());
    assert_eq!(fields_of(&validate_create_request(&body)), [STATUS]);
}

#[rstest]
fn format_joins_pairs_with_commas() {
    let errors = [
        FieldError::new(STATUS, "status is required"),
        FieldError::new(EMAIL, "email must be a valid email format"),
    ];
    assert_eq!(
        format_field_errors(&errors),
        "status: status is required, email: email must be a valid email format"
    );
    assert_eq!(format_field_errors(&[]), "");
}
