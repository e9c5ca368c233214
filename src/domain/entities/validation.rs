use std::borrow::Cow;

use validator::ValidationError;

use crate::constants::BLOG_CATEGORIES;

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "Links must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_blog_category(category: &str) -> Result<(), ValidationError> {
    if BLOG_CATEGORIES.iter().any(|c| c.eq_ignore_ascii_case(category)) {
        Ok(())
    } else {
        Err(new_validation_error("unknown_category", "Category must be one of Technology, Research, Innovation or Community"))
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "Value cannot be blank"));
    }
    Ok(())
}

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

/// Trims `value` and appends it unless it is blank or already present.
/// Returns whether the list changed.
pub fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|existing| existing == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

pub fn remove_item(list: &mut Vec<String>, value: &str) -> bool {
    let before = list.len();
    list.retain(|existing| existing != value);
    before != list.len()
}

/// Collapses optional text inputs: surrounding whitespace is dropped and an empty
/// string becomes `None`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
