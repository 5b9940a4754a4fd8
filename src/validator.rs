use std::fmt;

pub const EMPTY_USERNAME: &str = "Enter a username";
pub const INVALID_USERNAME: &str = "Invalid username format";

const MAX_HANDLE_LEN: usize = 39;

/// A GitHub login that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle(String);

impl Handle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub error_message: &'static str,
    pub search_enabled: bool,
}

/// Alphanumerics separated by single hyphens, 1 to 39 characters.
pub fn is_valid_handle(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_HANDLE_LEN
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
}

/// Whitespace as the page's own `String.prototype.trim` sees it: Unicode
/// White_Space minus U+0085, plus U+FEFF.
fn is_page_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn trim_input(raw: &str) -> &str {
    raw.trim_matches(is_page_whitespace)
}

pub fn validate_username(raw: &str) -> Validation {
    let username = trim_input(raw);

    let error_message = if username.is_empty() {
        EMPTY_USERNAME
    } else if !is_valid_handle(username) {
        INVALID_USERNAME
    } else {
        ""
    };

    let valid = error_message.is_empty();

    Validation {
        valid,
        error_message,
        search_enabled: valid,
    }
}

/// Trims and validates the raw input, yielding the handle to look up.
pub fn parse_handle(raw: &str) -> Result<Handle, Validation> {
    let validation = validate_username(raw);
    if validation.valid {
        Ok(Handle(trim_input(raw).to_string()))
    } else {
        Err(validation)
    }
}
