//! Text formats accepted for identifiers and contact data

use std::sync::OnceLock;

use regex::Regex;

static ISBN: OnceLock<Regex> = OnceLock::new();
static PHONE_NUMBER: OnceLock<Regex> = OnceLock::new();
static MAIL_ADDRESS: OnceLock<Regex> = OnceLock::new();
static INTERNET_LINK: OnceLock<Regex> = OnceLock::new();

/// ISBN-10 (nine digits and a digit or `X`) or ISBN-13 (978/979 and ten
/// more digits), optional `ISBN` prefix
///
/// A single hyphen or space may separate any two digits.
pub fn international_standard_book_number() -> &'static Regex {
    ISBN.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:ISBN(?:-1[03])?:?\s*)?",
            r"(?:[0-9](?:[- ]?[0-9]){8}[- ]?[0-9X]",
            r"|97[89](?:[- ]?[0-9]){9}[- ]?[0-9])$",
        ))
        .expect("Invalid regex")
    })
}

/// Digits with an optional leading `+`, grouped by spaces, dashes, dots,
/// slashes or parentheses
pub fn phone_number() -> &'static Regex {
    PHONE_NUMBER
        .get_or_init(|| Regex::new(r"^\+?[0-9(][0-9 ()\-./]*[0-9]$").expect("Invalid regex"))
}

pub fn mail_address() -> &'static Regex {
    MAIL_ADDRESS.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s.]+(?:\.[^@\s.]+)+$").expect("Invalid regex")
    })
}

/// Absolute http(s) link
pub fn internet_link() -> &'static Regex {
    INTERNET_LINK.get_or_init(|| {
        Regex::new(r"^(?i:https?)://[^\s/?#.]+(?:\.[^\s/?#.]+)*(?::[0-9]{1,5})?(?:[/?#]\S*)?$")
            .expect("Invalid regex")
    })
}
