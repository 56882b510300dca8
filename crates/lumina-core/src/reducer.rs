//! The pure state transition. No I/O, no side effects.

use crate::action::Action;
use crate::defaults::{default_content, default_theme};
use crate::state::AppState;

/// Apply `action` to `state`, returning the next state.
///
/// The input is never modified. [`Action::Unrecognized`] returns an equal
/// copy of the input.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    match action {
        Action::SetTheme(patch) => AppState {
            theme: patch.apply_to(&state.theme),
            ..state.clone()
        },
        Action::UpdateContent(patch) => AppState {
            content: patch.apply_to(&state.content),
            ..state.clone()
        },
        Action::Login => AppState {
            is_authenticated: true,
            ..state.clone()
        },
        Action::Logout => AppState {
            is_authenticated: false,
            ..state.clone()
        },
        Action::ResetDefaults => AppState {
            theme: default_theme(),
            content: default_content(),
            is_authenticated: state.is_authenticated,
        },
        Action::Unrecognized => state.clone(),
    }
}
