//! # Actions
//!
//! Everything that can happen in Glimpse becomes an `Action`.
//! User presses Enter on a sidebar item? That's `Action::Select`.
//! A background fetch resolves? That's `Action::ContentLoaded`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O (if any) the shell
//! must perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed a sequence of actions and assert on
//! the state, including the race the token guards against — select A,
//! select B, then let A's fetch resolve late and watch it get dropped.

use log::{debug, info, warn};
use serde_json::Value;

use crate::api::MenuItem;
use crate::core::state::{App, FetchState};

#[derive(Debug)]
pub enum Action {
    /// The startup menu fetch resolved.
    MenuLoaded(Result<Vec<MenuItem>, String>),
    /// The user activated a sidebar item (or cleared the selection).
    Select(Option<usize>),
    /// A content fetch resolved. `token` identifies which fetch.
    ContentLoaded {
        token: u64,
        result: Result<Value, String>,
    },
    /// User-initiated retry of a failed menu fetch.
    RetryMenu,
    /// User-initiated retry of the selected view's failed fetch.
    RetryContent,
    Quit,
}

/// I/O the shell must perform after a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    FetchMenu,
    FetchContent { token: u64, item: MenuItem },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::MenuLoaded(Ok(items)) => {
            info!("Menu loaded with {} items", items.len());
            app.menu = FetchState::Ready(items);
            app.status_message = String::from("Select an item from the sidebar");
            Effect::None
        }
        Action::MenuLoaded(Err(message)) => {
            warn!("Menu fetch failed: {message}");
            app.menu = FetchState::Error(message);
            app.status_message = String::from("Menu unavailable - press r to retry");
            Effect::None
        }
        Action::Select(Some(index)) => {
            if app.selected == Some(index) {
                // Re-selecting the active item is a no-op: no refetch.
                return Effect::None;
            }
            let Some(item) = app.menu_items().get(index).cloned() else {
                warn!("Select({index}) ignored: no such menu item");
                return Effect::None;
            };
            app.selected = Some(index);
            issue_fetch(app, item)
        }
        Action::Select(None) => {
            app.selected = None;
            // Bump the token so an in-flight fetch for the cleared
            // selection resolves stale instead of landing in Idle state.
            app.request_token += 1;
            app.content = FetchState::Idle;
            app.status_message = String::from("Select an item from the sidebar");
            Effect::None
        }
        Action::ContentLoaded { token, result } => {
            if token != app.request_token {
                // A fetch from a superseded selection resolved late.
                info!(
                    "Discarding stale fetch result (token {token}, current {})",
                    app.request_token
                );
                return Effect::None;
            }
            match result {
                Ok(payload) => {
                    debug!("Content ready for token {token}");
                    app.content = FetchState::Ready(payload);
                    app.status_message = String::new();
                }
                Err(message) => {
                    warn!("Content fetch failed for token {token}: {message}");
                    app.content = FetchState::Error(message);
                    app.status_message = String::from("Load failed - press r to retry");
                }
            }
            Effect::None
        }
        Action::RetryMenu => {
            if !matches!(app.menu, FetchState::Error(_)) {
                return Effect::None;
            }
            info!("Retrying menu fetch");
            app.menu = FetchState::Pending;
            app.status_message = String::from("Loading menu...");
            Effect::FetchMenu
        }
        Action::RetryContent => {
            if !matches!(app.content, FetchState::Error(_)) {
                return Effect::None;
            }
            let Some(item) = app.selected_item().cloned() else {
                return Effect::None;
            };
            info!("Retrying content fetch for '{}'", item.name);
            issue_fetch(app, item)
        }
        Action::Quit => Effect::Quit,
    }
}

/// Transitions content to `Pending` under a fresh token and asks the shell
/// to fetch. The token bump is what invalidates any in-flight fetch.
fn issue_fetch(app: &mut App, item: MenuItem) -> Effect {
    app.request_token += 1;
    app.content = FetchState::Pending;
    app.status_message = format!("Loading {}...", item.label);
    Effect::FetchContent {
        token: app.request_token,
        item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_menu};
    use serde_json::json;

    fn fetch_token(effect: &Effect) -> u64 {
        match effect {
            Effect::FetchContent { token, .. } => *token,
            other => panic!("expected FetchContent, got {other:?}"),
        }
    }

    #[test]
    fn test_menu_loaded_success() {
        let mut app = App::new();
        let effect = update(&mut app, Action::MenuLoaded(Ok(test_menu())));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.menu_items().len(), test_menu().len());
    }

    #[test]
    fn test_menu_loaded_failure_is_retryable() {
        let mut app = App::new();
        update(&mut app, Action::MenuLoaded(Err("boom".to_string())));
        assert!(matches!(app.menu, FetchState::Error(_)));

        let effect = update(&mut app, Action::RetryMenu);
        assert_eq!(effect, Effect::FetchMenu);
        assert!(app.menu.is_pending());
    }

    #[test]
    fn test_retry_menu_noop_unless_errored() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::RetryMenu), Effect::None);
    }

    #[test]
    fn test_select_issues_fetch_with_fresh_token() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Select(Some(0)));
        match effect {
            Effect::FetchContent { token, item } => {
                assert_eq!(token, 1);
                assert_eq!(item.name, "table");
            }
            other => panic!("expected FetchContent, got {other:?}"),
        }
        assert!(app.content.is_pending());
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_reselecting_current_item_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::Select(Some(0)));
        let token_before = app.request_token;

        let effect = update(&mut app, Action::Select(Some(0)));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.request_token, token_before);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Select(Some(42))), Effect::None);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_deselect_returns_to_idle() {
        let mut app = test_app();
        update(&mut app, Action::Select(Some(1)));
        update(&mut app, Action::Select(None));
        assert_eq!(app.selected, None);
        assert_eq!(app.content, FetchState::Idle);
    }

    /// Select an item, clear the selection, then let the item's fetch
    /// resolve: the result is stale and must not land in the idle state.
    #[test]
    fn test_deselect_discards_inflight_fetch() {
        let mut app = test_app();
        let token_a = fetch_token(&update(&mut app, Action::Select(Some(0))));
        update(&mut app, Action::Select(None));

        update(
            &mut app,
            Action::ContentLoaded {
                token: token_a,
                result: Ok(json!([{"year": 2020, "population": 1}])),
            },
        );
        assert_eq!(app.content, FetchState::Idle);
        assert_eq!(app.selected, None);
    }

    /// Select A, then B before A's fetch resolves, then A's fetch
    /// resolving: the displayed state must reflect B, never A's payload.
    #[test]
    fn test_stale_success_is_discarded() {
        let mut app = test_app();
        let token_a = fetch_token(&update(&mut app, Action::Select(Some(0))));
        let token_b = fetch_token(&update(&mut app, Action::Select(Some(1))));
        assert_ne!(token_a, token_b);

        // A resolves late; B is still in flight.
        update(
            &mut app,
            Action::ContentLoaded {
                token: token_a,
                result: Ok(json!([{"year": 1999, "population": 1}])),
            },
        );
        assert!(app.content.is_pending(), "stale payload must not land");
        assert_eq!(app.selected, Some(1));

        // B resolves and lands normally.
        update(
            &mut app,
            Action::ContentLoaded {
                token: token_b,
                result: Ok(json!("b's payload")),
            },
        );
        assert_eq!(app.content, FetchState::Ready(json!("b's payload")));
    }

    /// Stale failures are discarded too: an old fetch's error must not
    /// clobber the current selection's pending state.
    #[test]
    fn test_stale_failure_is_discarded() {
        let mut app = test_app();
        let token_a = fetch_token(&update(&mut app, Action::Select(Some(0))));
        update(&mut app, Action::Select(Some(1)));

        update(
            &mut app,
            Action::ContentLoaded {
                token: token_a,
                result: Err("timeout".to_string()),
            },
        );
        assert!(app.content.is_pending());
    }

    #[test]
    fn test_content_failure_then_retry_uses_fresh_token() {
        let mut app = test_app();
        let token_a = fetch_token(&update(&mut app, Action::Select(Some(0))));
        update(
            &mut app,
            Action::ContentLoaded {
                token: token_a,
                result: Err("HTTP 500".to_string()),
            },
        );
        assert!(matches!(app.content, FetchState::Error(_)));

        let retry_token = fetch_token(&update(&mut app, Action::RetryContent));
        assert!(retry_token > token_a);

        // A late duplicate of the failed fetch is now stale.
        update(
            &mut app,
            Action::ContentLoaded {
                token: token_a,
                result: Ok(json!([])),
            },
        );
        assert!(app.content.is_pending());
    }

    #[test]
    fn test_retry_content_noop_without_error() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::RetryContent), Effect::None);
        update(&mut app, Action::Select(Some(0)));
        assert_eq!(update(&mut app, Action::RetryContent), Effect::None);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
