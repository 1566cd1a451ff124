//! Register and login forms.

use super::{AttendoApp, ScreenView};
use crate::backend::CoreCmd;

pub(super) const MSG_FILL_ALL_FIELDS: &str = "Please fill all the fields";
pub(super) const MSG_REGISTERED: &str = "Registration Successful";
pub(super) const MSG_REGISTER_FAILED_PREFIX: &str = "Registration Failed";
pub(super) const MSG_REGISTER_SAVE_FAILED: &str = "Registration Failed to Save Data";
pub(super) const MSG_LOGIN_REQUIRED_FIELDS: &str = "Please enter email and password";
pub(super) const MSG_LOGIN_FAILED_PREFIX: &str = "Login Failed";

#[derive(Debug, Clone, Default)]
pub(crate) struct RegisterForm {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password: String,
    /// Set while a `Register` command awaits its reply.
    pub(crate) in_flight: bool,
}

/// Trimmed registration input, all fields non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Registration {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

impl RegisterForm {
    pub(crate) fn validate(&self) -> Result<Registration, &'static str> {
        let username = self.username.trim();
        let email = self.email.trim();
        let password = self.password.trim();
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(MSG_FILL_ALL_FIELDS);
        }
        Ok(Registration {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct LoginForm {
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) in_flight: bool,
}

impl LoginForm {
    /// # Returns
    /// Trimmed `(email, password)`.
    pub(crate) fn validate(&self) -> Result<(String, String), &'static str> {
        let email = self.email.trim();
        let password = self.password.trim();
        if email.is_empty() || password.is_empty() {
            return Err(MSG_LOGIN_REQUIRED_FIELDS);
        }
        Ok((email.to_string(), password.to_string()))
    }
}

impl AttendoApp {
    pub(super) fn register_submit(&mut self) {
        let screen = self.screen.token;
        let ScreenView::Register(form) = &mut self.screen.view else {
            return;
        };
        if form.in_flight {
            return;
        }
        let registration = match form.validate() {
            Ok(registration) => registration,
            Err(message) => {
                self.push_toast(message);
                return;
            }
        };
        form.in_flight = true;
        let queued = self.dispatch(CoreCmd::Register {
            screen,
            username: registration.username,
            email: registration.email,
            password: registration.password,
        });
        if !queued {
            self.finish_register_attempt();
        }
    }

    pub(super) fn finish_register_attempt(&mut self) {
        if let ScreenView::Register(form) = &mut self.screen.view {
            form.in_flight = false;
        }
    }

    pub(super) fn login_submit(&mut self) {
        let screen = self.screen.token;
        let ScreenView::Login(form) = &mut self.screen.view else {
            return;
        };
        if form.in_flight {
            return;
        }
        let (email, password) = match form.validate() {
            Ok(credentials) => credentials,
            Err(message) => {
                self.push_toast(message);
                return;
            }
        };
        form.in_flight = true;
        if !self.dispatch(CoreCmd::SignIn {
            screen,
            email,
            password,
        }) {
            self.finish_login_attempt();
        }
    }

    pub(super) fn finish_login_attempt(&mut self) {
        if let ScreenView::Login(form) = &mut self.screen.view {
            form.in_flight = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_form_trims_and_requires_every_field() {
        let mut form = RegisterForm {
            username: "  Alice ".to_string(),
            email: " a@x.com".to_string(),
            password: "   ".to_string(),
            in_flight: false,
        };
        assert_eq!(form.validate(), Err(MSG_FILL_ALL_FIELDS));

        form.password = " pw123456 ".to_string();
        assert_eq!(
            form.validate(),
            Ok(Registration {
                username: "Alice".to_string(),
                email: "a@x.com".to_string(),
                password: "pw123456".to_string(),
            })
        );
    }

    #[test]
    fn login_form_requires_email_and_password() {
        let mut form = LoginForm::default();
        assert_eq!(form.validate(), Err(MSG_LOGIN_REQUIRED_FIELDS));
        form.email = "a@x.com ".to_string();
        form.password = "pw".to_string();
        assert_eq!(
            form.validate(),
            Ok(("a@x.com".to_string(), "pw".to_string()))
        );
    }
}
