//! Registry of the storefront's form schemas.
//!
//! Each [`FormSchema`] variant owns a static field table built on first use.
//! Several fields pair a `pattern` with a `custom` check testing the same
//! condition. The pattern runs first, so its generic message is what callers
//! see for text input; the custom check still catches values the pattern
//! skips (numbers sent as JSON numbers).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::evaluator;
use super::numeric::coerce_number;
use super::rules::{FieldRules, FullMatch, Record, SchemaDescription, ValidationResult};
use crate::error::CoreError;

/// Smallest quantity accepted by the bulk-order inquiry form.
pub const MIN_BULK_ORDER_QUANTITY: u32 = 10;

/// Shortest order identifier accepted by the order tracking form.
pub const MIN_ORDER_ID_LENGTH: usize = 3;

/// A named form known to the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSchema {
    /// Account creation.
    SignUp,
    /// Phone number and password sign-in.
    SignIn,
    /// Phone number and one-time-code sign-in.
    OtpSignIn,
    BulkOrder,
    Checkout,
    TrackOrder,
    CustomerIntake,
}

impl FormSchema {
    pub const ALL: [FormSchema; 7] = [
        FormSchema::SignUp,
        FormSchema::SignIn,
        FormSchema::OtpSignIn,
        FormSchema::BulkOrder,
        FormSchema::Checkout,
        FormSchema::TrackOrder,
        FormSchema::CustomerIntake,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormSchema::SignUp => "sign_up",
            FormSchema::SignIn => "sign_in",
            FormSchema::OtpSignIn => "otp_sign_in",
            FormSchema::BulkOrder => "bulk_order",
            FormSchema::Checkout => "checkout",
            FormSchema::TrackOrder => "track_order",
            FormSchema::CustomerIntake => "customer_intake",
        }
    }

    /// Field rules in declaration order.
    pub fn fields(self) -> &'static [FieldRules] {
        match self {
            FormSchema::SignUp => SIGN_UP.as_slice(),
            FormSchema::SignIn => SIGN_IN.as_slice(),
            FormSchema::OtpSignIn => OTP_SIGN_IN.as_slice(),
            FormSchema::BulkOrder => BULK_ORDER.as_slice(),
            FormSchema::Checkout => CHECKOUT.as_slice(),
            FormSchema::TrackOrder => TRACK_ORDER.as_slice(),
            FormSchema::CustomerIntake => CUSTOMER_INTAKE.as_slice(),
        }
    }

    pub fn validate(self, record: &Record) -> ValidationResult {
        evaluator::validate(record, self.fields())
    }

    /// Copy of `record` holding only the fields this schema declares.
    pub fn project(self, record: &Record) -> Record {
        self.fields()
            .iter()
            .filter_map(|rules| {
                record
                    .get(rules.field)
                    .map(|value| (rules.field.to_string(), value.clone()))
            })
            .collect()
    }

    pub fn describe(self) -> SchemaDescription {
        SchemaDescription {
            name: self.name(),
            fields: self.fields().iter().map(FieldRules::describe).collect(),
        }
    }
}

impl fmt::Display for FormSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormSchema {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormSchema::ALL
            .into_iter()
            .find(|schema| schema.name() == s)
            .ok_or_else(|| CoreError::NotFound {
                entity: "FormSchema",
                key: s.to_string(),
            })
    }
}

// ── Patterns ─────────────────────────────────────────────────────────

fn full_match(source: &str) -> FullMatch {
    FullMatch::new(source).expect("valid regex")
}

/// Ten-digit mobile number starting with 6-9.
static PHONE_NUMBER: LazyLock<FullMatch> = LazyLock::new(|| full_match(r"[6-9]\d{9}"));
static EMAIL: LazyLock<FullMatch> = LazyLock::new(|| full_match(r"[^\s@]+@[^\s@]+\.[^\s@]+"));
static OTP: LazyLock<FullMatch> = LazyLock::new(|| full_match(r"\d{6}"));
static PINCODE: LazyLock<FullMatch> = LazyLock::new(|| full_match(r"[1-9]\d{5}"));

// ── Custom checks ────────────────────────────────────────────────────

/// Text of a string or number value; numbers keep their JSON spelling.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn check_matches(value: &Value, pattern: &FullMatch, message: &str) -> Option<String> {
    match text_of(value) {
        Some(text) if pattern.is_match(&text) => None,
        _ => Some(message.to_string()),
    }
}

fn check_phone_number(value: &Value, _: &Record) -> Option<String> {
    check_matches(
        value,
        &PHONE_NUMBER,
        "Please enter a valid 10-digit mobile number",
    )
}

fn check_email(value: &Value, _: &Record) -> Option<String> {
    check_matches(value, &EMAIL, "Please enter a valid email address")
}

fn check_otp(value: &Value, _: &Record) -> Option<String> {
    check_matches(value, &OTP, "Please enter the 6-digit code")
}

fn check_pincode(value: &Value, _: &Record) -> Option<String> {
    check_matches(value, &PINCODE, "Please enter a valid 6-digit pincode")
}

fn check_passwords_match(value: &Value, record: &Record) -> Option<String> {
    if record.get("password") == Some(value) {
        None
    } else {
        Some("Passwords do not match".to_string())
    }
}

fn check_quantity(value: &Value, _: &Record) -> Option<String> {
    match coerce_number(value) {
        None => Some("Quantity must be a number".to_string()),
        Some(q) if q.fract() != 0.0 => Some("Quantity must be a whole number".to_string()),
        Some(q) if q < f64::from(MIN_BULK_ORDER_QUANTITY) => Some(format!(
            "Minimum order quantity is {MIN_BULK_ORDER_QUANTITY}"
        )),
        Some(_) => None,
    }
}

fn check_amount(value: &Value, _: &Record) -> Option<String> {
    match coerce_number(value) {
        Some(amount) if amount > 0.0 => None,
        _ => Some("Please enter a valid amount".to_string()),
    }
}

fn check_order_id(value: &Value, _: &Record) -> Option<String> {
    match text_of(value) {
        Some(id) if id.trim().chars().count() >= MIN_ORDER_ID_LENGTH => None,
        _ => Some("Please enter a valid Order ID".to_string()),
    }
}

// ── Field tables ─────────────────────────────────────────────────────

fn phone_number() -> FieldRules {
    FieldRules::new("phone_number")
        .required()
        .pattern(PHONE_NUMBER.clone())
        .custom(check_phone_number)
}

fn email() -> FieldRules {
    FieldRules::new("email")
        .pattern(EMAIL.clone())
        .custom(check_email)
}

static SIGN_UP: LazyLock<Vec<FieldRules>> = LazyLock::new(|| {
    vec![
        FieldRules::new("username").required().min_length(3),
        phone_number(),
        FieldRules::new("password").required().min_length(6),
        FieldRules::new("confirmPassword")
            .required()
            .custom(check_passwords_match),
    ]
});

static SIGN_IN: LazyLock<Vec<FieldRules>> = LazyLock::new(|| {
    vec![
        phone_number(),
        FieldRules::new("password").required().min_length(6),
    ]
});

static OTP_SIGN_IN: LazyLock<Vec<FieldRules>> = LazyLock::new(|| {
    vec![
        phone_number(),
        FieldRules::new("otp")
            .required()
            .pattern(OTP.clone())
            .custom(check_otp),
    ]
});

static BULK_ORDER: LazyLock<Vec<FieldRules>> = LazyLock::new(|| {
    vec![
        FieldRules::new("name").required().min_length(2),
        email().required(),
        phone_number(),
        FieldRules::new("company_name").min_length(2),
        FieldRules::new("product").required(),
        FieldRules::new("quantity").required().custom(check_quantity),
        FieldRules::new("message").min_length(10),
    ]
});

static CHECKOUT: LazyLock<Vec<FieldRules>> = LazyLock::new(|| {
    vec![
        FieldRules::new("full_name").required().min_length(3),
        email().required(),
        phone_number(),
        FieldRules::new("address_line_1").required().min_length(10),
        FieldRules::new("city").required().min_length(2),
        FieldRules::new("pincode")
            .required()
            .pattern(PINCODE.clone())
            .custom(check_pincode),
        FieldRules::new("amount").required().custom(check_amount),
    ]
});

// The minimum length lives in the custom check so the message names the
// order ID instead of using the generic min-length text.
static TRACK_ORDER: LazyLock<Vec<FieldRules>> = LazyLock::new(|| {
    vec![FieldRules::new("orderId").required().custom(check_order_id)]
});

static CUSTOMER_INTAKE: LazyLock<Vec<FieldRules>> = LazyLock::new(|| {
    vec![
        FieldRules::new("name").required().min_length(2),
        phone_number(),
        email(),
        FieldRules::new("address").min_length(10),
        FieldRules::new("notes"),
    ]
});
