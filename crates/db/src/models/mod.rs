//! Row models and request DTOs.
//!
//! Each submodule holds the `FromRow` struct for one table plus the
//! `Create*` / `Update*` payloads accepted by its handlers.

pub mod artist;
pub mod category;
pub mod drink;
pub mod question;
pub mod show;
pub mod user;
pub mod venue;

use serde::{Deserialize, Deserializer};

use encore_core::directory::coerce_checkbox;

/// Deserialize a checkbox-like field into a boolean.
///
/// Accepts a JSON boolean or a form-style string value (`"y"`, `"on"`,
/// `"true"`); a missing field defaults to `false` via `#[serde(default)]`.
pub(crate) fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CheckboxValue {
        Flag(bool),
        Text(String),
    }

    Ok(match CheckboxValue::deserialize(deserializer)? {
        CheckboxValue::Flag(flag) => flag,
        CheckboxValue::Text(text) => coerce_checkbox(&text),
    })
}

/// Optional variant of [`checkbox`] for partial updates, where a missing
/// field means "leave unchanged" rather than `false`.
pub(crate) fn checkbox_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    checkbox(deserializer).map(Some)
}
