//! The three auth form modes and everything that is a pure function of them:
//! which fields render, which auxiliary links show, and the card copy.

use crate::routes::paths;
use std::fmt;

/// Form mode, fixed per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthMode {
    Login,
    SignUp,
    ForgotPassword,
}

/// Input fields an auth form may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

/// Static copy shown on the form card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormContent {
    pub title: &'static str,
    pub description: &'static str,
    pub submit_label: &'static str,
}

/// Footer prompt with the link that toggles to the sibling form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub prompt: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

/// Label shown on the submit button while a submission is in flight.
pub const BUSY_LABEL: &str = "Processing...";

impl AuthMode {
    pub const ALL: [AuthMode; 3] = [AuthMode::Login, AuthMode::SignUp, AuthMode::ForgotPassword];

    pub const fn as_str(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::SignUp => "signup",
            AuthMode::ForgotPassword => "forgot-password",
        }
    }

    /// Whether `field` is rendered in this mode.
    pub const fn shows(self, field: Field) -> bool {
        match field {
            Field::Name => matches!(self, AuthMode::SignUp),
            Field::Email => true,
            Field::Password => matches!(self, AuthMode::Login | AuthMode::SignUp),
        }
    }

    pub const fn shows_forgot_link(self) -> bool {
        matches!(self, AuthMode::Login)
    }

    pub const fn shows_social_login(self) -> bool {
        matches!(self, AuthMode::Login | AuthMode::SignUp)
    }

    pub const fn content(self) -> FormContent {
        match self {
            AuthMode::Login => FormContent {
                title: "Welcome Back!",
                description: "Sign in to continue to SwiftLogin.",
                submit_label: "Login",
            },
            AuthMode::SignUp => FormContent {
                title: "Create an Account",
                description: "Get started with SwiftLogin in seconds.",
                submit_label: "Create Account",
            },
            AuthMode::ForgotPassword => FormContent {
                title: "Forgot Password?",
                description: "Enter your email and we'll send you a reset link.",
                submit_label: "Send Reset Link",
            },
        }
    }

    pub const fn footer_link(self) -> FooterLink {
        match self {
            AuthMode::Login => FooterLink {
                prompt: "Don't have an account?",
                label: "Sign Up",
                href: paths::SIGN_UP,
            },
            AuthMode::SignUp => FooterLink {
                prompt: "Already have an account?",
                label: "Login",
                href: paths::LOGIN,
            },
            AuthMode::ForgotPassword => FooterLink {
                prompt: "Remembered your password?",
                label: "Login",
                href: paths::LOGIN,
            },
        }
    }

    /// Destination after a successful submission, if the mode navigates at all.
    pub const fn success_redirect(self) -> Option<&'static str> {
        match self {
            AuthMode::Login | AuthMode::SignUp => Some(paths::DASHBOARD),
            AuthMode::ForgotPassword => None,
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Field {
    /// Render order of the fields.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "you@example.com",
            Field::Password => "••••••••",
        }
    }

    /// HTML input type for the field.
    pub const fn input_type(self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub const fn autocomplete(self, mode: AuthMode) -> &'static str {
        match (self, mode) {
            (Field::Name, _) => "name",
            (Field::Email, _) => "email",
            (Field::Password, AuthMode::SignUp) => "new-password",
            (Field::Password, _) => "current-password",
        }
    }

    /// Material symbol rendered inside the input.
    pub const fn icon(self) -> &'static str {
        match self {
            Field::Name => "person",
            Field::Email => "mail",
            Field::Password => "lock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthMode, Field};

    fn visible(mode: AuthMode) -> (bool, bool, bool, bool, bool) {
        (
            mode.shows(Field::Name),
            mode.shows(Field::Email),
            mode.shows(Field::Password),
            mode.shows_forgot_link(),
            mode.shows_social_login(),
        )
    }

    #[test]
    fn field_visibility_matches_mode_table() {
        assert_eq!(visible(AuthMode::Login), (false, true, true, true, true));
        assert_eq!(visible(AuthMode::SignUp), (true, true, true, false, true));
        assert_eq!(
            visible(AuthMode::ForgotPassword),
            (false, true, false, false, false)
        );
    }

    #[test]
    fn submit_labels_are_mode_specific() {
        assert_eq!(AuthMode::Login.content().submit_label, "Login");
        assert_eq!(AuthMode::SignUp.content().submit_label, "Create Account");
        assert_eq!(
            AuthMode::ForgotPassword.content().submit_label,
            "Send Reset Link"
        );
    }

    #[test]
    fn footer_link_toggles_between_login_and_signup() {
        assert_eq!(AuthMode::Login.footer_link().href, "/sign-up");
        assert_eq!(AuthMode::SignUp.footer_link().href, "/");
        assert_eq!(AuthMode::ForgotPassword.footer_link().href, "/");
    }

    #[test]
    fn only_login_and_signup_redirect() {
        assert_eq!(AuthMode::Login.success_redirect(), Some("/dashboard"));
        assert_eq!(AuthMode::SignUp.success_redirect(), Some("/dashboard"));
        assert_eq!(AuthMode::ForgotPassword.success_redirect(), None);
    }

    #[test]
    fn mode_displays_its_wire_name() {
        assert_eq!(AuthMode::Login.to_string(), "login");
        assert_eq!(AuthMode::SignUp.to_string(), "signup");
        assert_eq!(AuthMode::ForgotPassword.to_string(), "forgot-password");
    }

    #[test]
    fn password_autocomplete_depends_on_mode() {
        assert_eq!(Field::Password.autocomplete(AuthMode::Login), "current-password");
        assert_eq!(Field::Password.autocomplete(AuthMode::SignUp), "new-password");
    }
}
