//! Property-based tests for the Nav state machine.
//!
//! Tests verify that invariants hold under arbitrary event sequences.
//! This ensures behavioral correctness across all possible execution paths.

use proptest::prelude::*;
use turnstile_app::{Destination, Nav, NavEvent};
use turnstile_core::{AuthError, AuthState, User};
use turnstile_harness::{InvariantRegistry, NavSnapshot};

fn user_strategy() -> impl Strategy<Value = User> {
    prop_oneof![
        Just(User::new("megaZord123", "John", "Doe")),
        Just(User::new("originalUsername", "Mlon", "Eusk")),
    ]
}

fn auth_strategy() -> impl Strategy<Value = AuthState> {
    prop_oneof![
        Just(AuthState::Unknown),
        Just(AuthState::Unauthenticated),
        user_strategy().prop_map(AuthState::Authenticated),
    ]
}

fn destination_strategy() -> impl Strategy<Value = Destination> {
    prop_oneof![
        Just(Destination::Home),
        Just(Destination::Settings),
        Just(Destination::Login),
    ]
}

/// Generate random navigation events.
fn event_strategy() -> impl Strategy<Value = NavEvent> {
    prop_oneof![
        3 => auth_strategy().prop_map(NavEvent::AuthChanged),
        2 => destination_strategy().prop_map(NavEvent::NavigateTo),
        3 => "[a-zA-Z0-9]{0,12}".prop_map(NavEvent::UsernameInput),
        2 => Just(NavEvent::SubmitLogin),
        1 => "[a-z]{1,8}".prop_map(|username| {
            NavEvent::LoginFailed(AuthError::UnknownUser { username })
        }),
        1 => Just(NavEvent::LoginSettled),
        1 => Just(NavEvent::LogoutRequested),
    ]
}

proptest! {
    #[test]
    fn prop_nav_invariants_hold(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut nav = Nav::new();
        let invariants = InvariantRegistry::standard();

        for event in events {
            let _ = nav.handle(event);
            let snapshot = NavSnapshot::of(&nav);
            prop_assert!(invariants.check_all(&snapshot).is_ok());
        }
    }

    #[test]
    fn prop_editing_clears_any_error(
        events in prop::collection::vec(event_strategy(), 0..40),
        input in "[a-zA-Z0-9]{0,12}",
    ) {
        let mut nav = Nav::new();
        for event in events {
            let _ = nav.handle(event);
        }

        let _ = nav.handle(NavEvent::UsernameInput(input.clone()));

        prop_assert!(nav.form().error.is_none());
        prop_assert_eq!(&nav.form().username_input, &input);
    }

    #[test]
    fn prop_unauthenticated_never_holds_a_protected_location(
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut nav = Nav::new();
        for event in events {
            let _ = nav.handle(event);
            if *nav.auth() == AuthState::Unauthenticated {
                prop_assert!(!nav.location().requires_auth());
            }
        }
    }
}
