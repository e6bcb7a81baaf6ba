//! Error message formatting for the built-in rules.

/// Turn a field name into a display label for the required and min-length
/// messages.
///
/// Only the first underscore becomes a space; then the first character of
/// every word is upper-cased. Word characters are ASCII letters, digits, and
/// `_`, so anything after a second underscore stays glued to its word.
///
/// ```
/// use storefront_core::validation::messages::humanize_field;
///
/// assert_eq!(humanize_field("phone_number"), "Phone Number");
/// assert_eq!(humanize_field("address_line_1"), "Address Line_1");
/// assert_eq!(humanize_field("confirmPassword"), "ConfirmPassword");
/// ```
pub fn humanize_field(field: &str) -> String {
    let replaced = field.replacen('_', " ", 1);
    let mut label = String::with_capacity(replaced.len());
    let mut in_word = false;

    for c in replaced.chars() {
        let word_char = is_word_char(c);
        if word_char && !in_word {
            label.push(c.to_ascii_uppercase());
        } else {
            label.push(c);
        }
        in_word = word_char;
    }

    label
}

/// Lower-case label used by the pattern message; every underscore becomes a
/// space.
pub fn pattern_label(field: &str) -> String {
    field.replace('_', " ").to_lowercase()
}

pub fn required_message(field: &str) -> String {
    format!("{} is required", humanize_field(field))
}

pub fn min_length_message(field: &str, min: usize) -> String {
    format!(
        "{} must be at least {min} characters long",
        humanize_field(field)
    )
}

pub fn pattern_message(field: &str) -> String {
    format!("Please enter a valid {}", pattern_label(field))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
