//! Field-level validation for review submissions.
//!
//! Validation runs against the raw JSON body so that shape errors (a number
//! where a string is expected, a missing field) are reported per field rather
//! than as a single deserialisation failure. Every rule is evaluated; callers
//! receive the full list of failures in field order.
//!
//! Presence checks mirror the loose truthiness the public API has always
//! accepted: `null`, `false`, `0` and `""` count as missing for the text and
//! status fields. `serial_no` is only missing when absent or `null`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Number, Value};

use super::review::{NewReview, ReviewStatus};

/// Field name for the caller-supplied serial number.
pub const SERIAL_NO: &str = "serial_no";
/// Field name for the review text.
pub const REVIEW: &str = "review";
/// Field name for the review status.
pub const STATUS: &str = "status";
/// Field name for the contact mobile number.
pub const MOBILE_NO: &str = "mobile_no";
/// Field name for the contact email address.
pub const EMAIL: &str = "email";

/// A single field-level validation failure.
///
/// # Examples
/// ```
/// use review_api::domain::validate_create_request;
/// use serde_json::json;
///
/// let errors = validate_create_request(&json!({}));
/// assert_eq!(errors[0].to_string(), "serial_no: serial_no is required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static MOBILE_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn mobile_regex() -> &'static Regex {
    MOBILE_RE.get_or_init(|| {
        // `\d` is Unicode-aware in `regex`; only ASCII digits are accepted.
        Regex::new(r"^[0-9]{10}$")
            .unwrap_or_else(|error| panic!("mobile number regex failed to compile: {error}"))
    })
}

/// Return true when `email` has a `local@domain.tld` shape with no whitespace.
///
/// # Examples
/// ```
/// use review_api::domain::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("user.example.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Return true when `mobile_no` is exactly ten ASCII digits.
///
/// # Examples
/// ```
/// use review_api::domain::is_valid_mobile_number;
///
/// assert!(is_valid_mobile_number("1234567890"));
/// assert!(!is_valid_mobile_number("12345a7890"));
/// ```
pub fn is_valid_mobile_number(mobile_no: &str) -> bool {
    mobile_regex().is_match(mobile_no)
}

/// Return true when `status` is exactly `PASS` or `FAIL`.
pub fn is_valid_status(status: &str) -> bool {
    status.parse::<ReviewStatus>().is_ok()
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => !flag,
        Some(Value::Number(number)) => number.as_f64() == Some(0.0),
        Some(Value::String(text)) => text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => false,
    }
}

fn present_str(value: Option<&Value>) -> Option<&str> {
    if is_missing(value) {
        return None;
    }
    value.and_then(Value::as_str)
}

/// Exact 64-bit integer value of a JSON number, accepting `42.0` as `42`.
fn integral_value(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    let float = number.as_f64()?;
    let in_range = float >= -9_223_372_036_854_775_808.0 && float < 9_223_372_036_854_775_808.0;
    (float.fract() == 0.0 && in_range).then(|| float as i64)
}

fn is_whole(number: &Number) -> bool {
    number.is_u64() || number.as_f64().is_some_and(|float| float.fract() == 0.0)
}

fn check_serial_no(value: Option<&Value>) -> Option<FieldError> {
    match value {
        None | Some(Value::Null) => Some(FieldError::new(SERIAL_NO, "serial_no is required")),
        Some(Value::Number(number)) => match integral_value(number) {
            Some(_) => None,
            None if is_whole(number) => Some(FieldError::new(
                SERIAL_NO,
                "serial_no must fit in a signed 64-bit integer",
            )),
            None => Some(FieldError::new(SERIAL_NO, "serial_no must be an integer")),
        },
        Some(_) => Some(FieldError::new(SERIAL_NO, "serial_no must be a number")),
    }
}

fn check_review(value: Option<&Value>) -> Option<FieldError> {
    let valid = present_str(value).is_some_and(|text| !text.trim().is_empty());
    (!valid).then(|| {
        FieldError::new(
            REVIEW,
            "review is required and must be a non-empty string",
        )
    })
}

fn check_status(value: Option<&Value>) -> Option<FieldError> {
    if is_missing(value) {
        return Some(FieldError::new(STATUS, "status is required"));
    }
    let valid = value.and_then(Value::as_str).is_some_and(is_valid_status);
    (!valid).then(|| FieldError::new(STATUS, "status must be either PASS or FAIL"))
}

fn check_mobile_no(value: Option<&Value>) -> Option<FieldError> {
    match present_str(value) {
        None => Some(FieldError::new(
            MOBILE_NO,
            "mobile_no is required and must be a string",
        )),
        Some(mobile_no) if !is_valid_mobile_number(mobile_no) => Some(FieldError::new(
            MOBILE_NO,
            "mobile_no must be exactly 10 digits",
        )),
        Some(_) => None,
    }
}

fn check_email(value: Option<&Value>) -> Option<FieldError> {
    match present_str(value) {
        None => Some(FieldError::new(
            EMAIL,
            "email is required and must be a string",
        )),
        Some(email) if !is_valid_email(email) => Some(FieldError::new(
            EMAIL,
            "email must be a valid email format",
        )),
        Some(_) => None,
    }
}

/// Validate an untyped review submission.
///
/// Returns every failing rule in field order; an empty list means the input
/// is valid. Non-object inputs are treated as an object with no fields.
///
/// # Examples
/// ```
/// use review_api::domain::validate_create_request;
/// use serde_json::json;
///
/// let errors = validate_create_request(&json!({ "serial_no": 1 }));
/// let fields: Vec<_> = errors.iter().map(|error| error.field).collect();
/// assert_eq!(fields, ["review", "status", "mobile_no", "email"]);
/// ```
pub fn validate_create_request(data: &Value) -> Vec<FieldError> {
    let fields = data.as_object();
    let get = |name: &str| fields.and_then(|map| map.get(name));

    [
        check_serial_no(get(SERIAL_NO)),
        check_review(get(REVIEW)),
        check_status(get(STATUS)),
        check_mobile_no(get(MOBILE_NO)),
        check_email(get(EMAIL)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn string_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str)
}

/// Normalise a fully valid submission into a [`NewReview`].
///
/// Review text is trimmed and the email trimmed and lower-cased; other
/// fields pass through unchanged. Returns `None` when any rule fails; call
/// [`validate_create_request`] to learn which.
///
/// # Examples
/// ```
/// use review_api::domain::{parse_and_validate, ReviewStatus};
/// use serde_json::json;
///
/// let request = parse_and_validate(&json!({
///     "serial_no": 7,
///     "review": "  Works well  ",
///     "status": "PASS",
///     "mobile_no": "1234567890",
///     "email": "User@Example.com",
/// }))
/// .expect("valid submission");
/// assert_eq!(request.review, "Works well");
/// assert_eq!(request.email, "user@example.com");
/// assert_eq!(request.status, ReviewStatus::Pass);
/// ```
pub fn parse_and_validate(data: &Value) -> Option<NewReview> {
    if !validate_create_request(data).is_empty() {
        return None;
    }

    let fields = data.as_object()?;
    let serial_no = match fields.get(SERIAL_NO)? {
        Value::Number(number) => integral_value(number)?,
        _ => return None,
    };
    let status = string_field(fields, STATUS)?.parse::<ReviewStatus>().ok()?;

    Some(NewReview {
        serial_no,
        review: string_field(fields, REVIEW)?.trim().to_owned(),
        status,
        mobile_no: string_field(fields, MOBILE_NO)?.to_owned(),
        email: string_field(fields, EMAIL)?.trim().to_lowercase(),
    })
}

/// Join every `field: message` pair with `", "`.
///
/// # Examples
/// ```
/// use review_api::domain::{format_field_errors, validate_create_request};
/// use serde_json::json;
///
/// let errors = validate_create_request(&json!({
///     "serial_no": "one",
///     "review": "ok",
///     "status": "PASS",
///     "mobile_no": "1234567890",
///     "email": "user@",
/// }));
/// assert_eq!(
///     format_field_errors(&errors),
///     "serial_no: serial_no must be a number, email: email must be a valid email format"
/// );
/// ```
pub fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests;
