//! Mutation requests accepted by the store.
//!
//! On the wire an action is `{"type": "SET_THEME", "payload": {...}}`.
//! Tags outside the known set decode to [`Action::Unrecognized`] rather than
//! failing, and the reducer treats that as a no-op.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::content::ContentPatch;
use crate::theme::ThemePatch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Shallow-merge the given fields into the theme.
    SetTheme(ThemePatch),
    /// Shallow-merge the given sub-objects and collections into the content.
    UpdateContent(ContentPatch),
    Login,
    Logout,
    /// Restore default theme and content, leaving the signed-in flag alone.
    ResetDefaults,
    #[serde(other)]
    Unrecognized,
}

impl Action {
    /// Decode a wire action leniently.
    ///
    /// Anything without a known string `type` decodes to
    /// [`Action::Unrecognized`]. `LOGIN`, `LOGOUT` and `RESET_DEFAULTS` ignore
    /// any payload. A missing or `null` payload on `SET_THEME` or
    /// `UPDATE_CONTENT` is an empty patch.
    ///
    /// # Errors
    ///
    /// Fails only when a known tag carries a payload that does not fit it.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        let Some(tag) = value.get("type").and_then(serde_json::Value::as_str) else {
            return Ok(Self::Unrecognized);
        };
        let payload = value.get("payload");
        Ok(match tag {
            "SET_THEME" => Self::SetTheme(patch_from(payload)?),
            "UPDATE_CONTENT" => Self::UpdateContent(patch_from(payload)?),
            "LOGIN" => Self::Login,
            "LOGOUT" => Self::Logout,
            "RESET_DEFAULTS" => Self::ResetDefaults,
            _ => Self::Unrecognized,
        })
    }

    /// The wire tag, for logs.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SetTheme(_) => "SET_THEME",
            Self::UpdateContent(_) => "UPDATE_CONTENT",
            Self::Login => "LOGIN",
            Self::Logout => "LOGOUT",
            Self::ResetDefaults => "RESET_DEFAULTS",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

fn patch_from<T: DeserializeOwned + Default>(
    payload: Option<&serde_json::Value>,
) -> Result<T, serde_json::Error> {
    match payload {
        None | Some(serde_json::Value::Null) => Ok(T::default()),
        Some(payload) => T::deserialize(payload),
    }
}
