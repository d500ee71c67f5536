//! Navigation state machine.
//!
//! This module defines the [`Nav`] state machine, which decides which
//! screen the user is allowed to see from the current authentication state,
//! completely decoupled from I/O and rendering.
//!
//! This is a pure state machine: it consumes [`crate::NavEvent`] inputs and
//! produces [`crate::NavAction`] instructions for the runtime to execute.
//!
//! # Guarding
//!
//! For a protected destination, `Unknown` suspends rendering behind a
//! waiting indicator, `Unauthenticated` issues a single redirect to the
//! login destination, and `Authenticated` renders the screen with the user.
//! For the login destination, a committed `Authenticated` state issues a
//! single redirect back to home with the history cleared, so
//! back-navigation cannot return to the login screen.

use turnstile_core::AuthState;

use crate::{Destination, LoginForm, NavAction, NavEvent, Screen};

/// Navigation state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct Nav {
    /// Latest committed authentication state.
    auth: AuthState,
    /// Where the user currently is.
    location: Destination,
    /// Login form sub-state. Kept across visits until a login succeeds.
    form: LoginForm,
}

impl Nav {
    /// Create a Nav positioned on the home destination with the
    /// authentication state still unknown.
    pub fn new() -> Self {
        Self { auth: AuthState::Unknown, location: Destination::Home, form: LoginForm::default() }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: NavEvent) -> Vec<NavAction> {
        match event {
            NavEvent::AuthChanged(state) => {
                self.auth = state;
                self.apply_guard()
            },
            NavEvent::NavigateTo(destination) => {
                self.location = destination;
                self.apply_guard()
            },
            NavEvent::UsernameInput(input) => {
                // Editing always clears a stale error.
                self.form.username_input = input;
                self.form.error = None;
                self.render_if_on_login()
            },
            NavEvent::SubmitLogin => {
                if self.location != Destination::Login || self.form.in_progress {
                    return vec![];
                }
                self.form.in_progress = true;
                self.form.error = None;
                vec![
                    NavAction::Render,
                    NavAction::PerformLogin { username: self.form.username_input.clone() },
                ]
            },
            NavEvent::LoginFailed(error) => {
                self.form.in_progress = false;
                self.form.error = Some(error);
                self.render_if_on_login()
            },
            NavEvent::LoginSettled => {
                // The redirect is driven by the Authenticated observation;
                // repainting the form here would re-render stale input.
                self.form.in_progress = false;
                vec![]
            },
            NavEvent::LogoutRequested => vec![NavAction::PerformLogout],
            NavEvent::Quit => vec![NavAction::Quit],
        }
    }

    /// What the presentation layer should draw right now.
    pub fn screen(&self) -> Screen {
        match self.location {
            Destination::Home | Destination::Settings => match &self.auth {
                AuthState::Authenticated(user) => {
                    if self.location == Destination::Home {
                        Screen::Home { user: user.clone() }
                    } else {
                        Screen::Settings { user: user.clone() }
                    }
                },
                // Unknown while the credential check resolves; a protected
                // location never outlives an Unauthenticated observation.
                AuthState::Unknown | AuthState::Unauthenticated => Screen::Loading,
            },
            Destination::Login => {
                if self.auth.is_authenticated() {
                    Screen::Loading
                } else {
                    Screen::Login { form: self.form.clone() }
                }
            },
        }
    }

    /// Latest committed authentication state.
    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// Current destination.
    pub fn location(&self) -> Destination {
        self.location
    }

    /// Login form sub-state.
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Re-evaluate the guard for the current location and auth state.
    ///
    /// Moves the location itself when a redirect is required, so a repeated
    /// observation of the same state never issues a second redirect.
    fn apply_guard(&mut self) -> Vec<NavAction> {
        if self.location.requires_auth() {
            match &self.auth {
                AuthState::Unknown | AuthState::Authenticated(_) => vec![NavAction::Render],
                AuthState::Unauthenticated => {
                    self.location = Destination::Login;
                    vec![
                        NavAction::Redirect { to: Destination::Login, clear_history: false },
                        NavAction::Render,
                    ]
                },
            }
        } else if self.auth.is_authenticated() {
            // Leaving login: drop the form so stale input is never
            // re-rendered, and clear history so back cannot return here.
            self.form = LoginForm::default();
            self.location = Destination::Home;
            vec![
                NavAction::Redirect { to: Destination::Home, clear_history: true },
                NavAction::Render,
            ]
        } else {
            vec![NavAction::Render]
        }
    }

    fn render_if_on_login(&self) -> Vec<NavAction> {
        if self.location == Destination::Login {
            vec![NavAction::Render]
        } else {
            vec![]
        }
    }
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use turnstile_core::{AuthError, User};

    use super::*;

    fn john() -> User {
        User::new("megaZord123", "John", "Doe")
    }

    fn unauthenticated_nav() -> Nav {
        let mut nav = Nav::new();
        let _ = nav.handle(NavEvent::AuthChanged(AuthState::Unauthenticated));
        nav
    }

    #[test]
    fn unknown_state_suspends_rendering() {
        let mut nav = Nav::new();
        assert_eq!(nav.screen(), Screen::Loading);

        let actions = nav.handle(NavEvent::AuthChanged(AuthState::Unknown));
        assert_eq!(actions, vec![NavAction::Render]);
        assert_eq!(nav.screen(), Screen::Loading);
    }

    #[test]
    fn unauthenticated_on_protected_screen_redirects_to_login_once() {
        let mut nav = Nav::new();
        let actions = nav.handle(NavEvent::AuthChanged(AuthState::Unauthenticated));

        assert_eq!(actions, vec![
            NavAction::Redirect { to: Destination::Login, clear_history: false },
            NavAction::Render,
        ]);
        assert_eq!(nav.location(), Destination::Login);

        // A repeated observation of the same state does not redirect again.
        let actions = nav.handle(NavEvent::AuthChanged(AuthState::Unauthenticated));
        assert_eq!(actions, vec![NavAction::Render]);
    }

    #[test]
    fn authenticated_renders_protected_screen_with_user() {
        let mut nav = Nav::new();
        let _ = nav.handle(NavEvent::AuthChanged(AuthState::Authenticated(john())));

        assert_eq!(nav.screen(), Screen::Home { user: john() });
    }

    #[test]
    fn authentication_on_login_screen_redirects_home_clearing_history() {
        let mut nav = unauthenticated_nav();
        let _ = nav.handle(NavEvent::UsernameInput("megaZord123".into()));

        let actions = nav.handle(NavEvent::AuthChanged(AuthState::Authenticated(john())));
        assert_eq!(actions, vec![
            NavAction::Redirect { to: Destination::Home, clear_history: true },
            NavAction::Render,
        ]);
        assert_eq!(nav.location(), Destination::Home);

        // The form was reset; no stale input survives for the next visit.
        assert!(nav.form().username_input.is_empty());
    }

    #[test]
    fn submit_emits_login_with_current_input() {
        let mut nav = unauthenticated_nav();
        let _ = nav.handle(NavEvent::UsernameInput("originalUsername".into()));

        let actions = nav.handle(NavEvent::SubmitLogin);
        assert_eq!(actions, vec![
            NavAction::Render,
            NavAction::PerformLogin { username: "originalUsername".into() },
        ]);
        assert!(nav.form().in_progress);
    }

    #[test]
    fn submit_is_ignored_while_a_login_is_in_flight() {
        let mut nav = unauthenticated_nav();
        let _ = nav.handle(NavEvent::SubmitLogin);

        assert_eq!(nav.handle(NavEvent::SubmitLogin), vec![]);
    }

    #[test]
    fn login_failure_surfaces_an_inline_error() {
        let mut nav = unauthenticated_nav();
        let _ = nav.handle(NavEvent::UsernameInput("nobody".into()));
        let _ = nav.handle(NavEvent::SubmitLogin);

        let error = AuthError::UnknownUser { username: "nobody".into() };
        let actions = nav.handle(NavEvent::LoginFailed(error.clone()));

        assert_eq!(actions, vec![NavAction::Render]);
        assert_eq!(nav.form().error, Some(error));
        assert!(!nav.form().in_progress);
    }

    #[test]
    fn editing_clears_the_error_on_the_very_next_edit() {
        let mut nav = unauthenticated_nav();
        let _ = nav.handle(NavEvent::SubmitLogin);
        let _ = nav.handle(NavEvent::LoginFailed(AuthError::UnknownUser {
            username: String::new(),
        }));

        let _ = nav.handle(NavEvent::UsernameInput("m".into()));
        assert_eq!(nav.form().error, None);
        assert_eq!(nav.form().username_input, "m");
    }

    #[test]
    fn settled_login_does_not_repaint_the_form() {
        let mut nav = unauthenticated_nav();
        let _ = nav.handle(NavEvent::SubmitLogin);

        assert_eq!(nav.handle(NavEvent::LoginSettled), vec![]);
        assert!(!nav.form().in_progress);
    }

    #[test]
    fn navigate_to_settings_stays_guarded() {
        let mut nav = Nav::new();
        let _ = nav.handle(NavEvent::AuthChanged(AuthState::Authenticated(john())));
        let actions = nav.handle(NavEvent::NavigateTo(Destination::Settings));

        assert_eq!(actions, vec![NavAction::Render]);
        assert_eq!(nav.screen(), Screen::Settings { user: john() });

        // Losing authentication while on settings redirects like any other
        // protected screen.
        let actions = nav.handle(NavEvent::AuthChanged(AuthState::Unauthenticated));
        assert_eq!(actions, vec![
            NavAction::Redirect { to: Destination::Login, clear_history: false },
            NavAction::Render,
        ]);
    }

    #[test]
    fn logout_and_quit_pass_through() {
        let mut nav = Nav::new();
        assert_eq!(nav.handle(NavEvent::LogoutRequested), vec![NavAction::PerformLogout]);
        assert_eq!(nav.handle(NavEvent::Quit), vec![NavAction::Quit]);
    }
}
