//! Validation and parsing helpers for the venue/artist/show directory.

use std::sync::OnceLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a seeking description.
pub const MAX_SEEKING_DESCRIPTION_LENGTH: usize = 240;

/// Number of recently listed venues/artists shown on the home feed.
pub const RECENT_LISTING_LIMIT: i64 = 10;

// ---------------------------------------------------------------------------
// Checkbox coercion
// ---------------------------------------------------------------------------

/// Coerce a checkbox-like form value to a boolean.
///
/// HTML checkbox submissions arrive as `"y"` / `"on"` / `"true"` when
/// ticked and are absent otherwise; anything unrecognised is `false`.
pub fn coerce_checkbox(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "on" | "true" | "1"
    )
}

// ---------------------------------------------------------------------------
// Phone numbers
// ---------------------------------------------------------------------------

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Optional +country prefix, then digits with common separators.
        // The digit count is checked separately.
        Regex::new(r"^\+?[0-9 ().-]{6,20}$").expect("phone regex is valid")
    })
}

/// Validate a phone number: digits with common separators, 7-15 digits total.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(7..=15).contains(&digits) || !phone_regex().is_match(phone) {
        return Err(format!("Invalid phone number '{phone}'"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

/// Validate a genre list: at least one entry, none blank.
pub fn validate_genres(genres: &[String]) -> Result<(), String> {
    if genres.is_empty() {
        return Err("At least one genre is required".to_string());
    }
    if genres.iter().any(|g| g.trim().is_empty()) {
        return Err("Genres cannot be blank".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Location search
// ---------------------------------------------------------------------------

/// Split a `"City, ST"` search term into city and state components.
///
/// Both halves are trimmed. The state half may be empty only if the term
/// has no comma at all, which is an error.
pub fn parse_location_term(term: &str) -> Result<(String, String), String> {
    let (city, state) = term
        .split_once(',')
        .ok_or_else(|| format!("Expected 'City, State' but got '{term}'"))?;

    let city = city.trim();
    let state = state.trim();
    if city.is_empty() || state.is_empty() {
        return Err(format!("Expected 'City, State' but got '{term}'"));
    }
    Ok((city.to_string(), state.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
