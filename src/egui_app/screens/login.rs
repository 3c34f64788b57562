//! Login screen controller
//!
//! `Idle -> Submitting -> LoggedIn`, or back to `Idle` after a failed
//! attempt. Credentials are sent exactly as typed.

use crate::egui_app::auth::{LoginOutcome, RemoteAuthenticator};
use crate::egui_app::navigation::Screen;
use crate::egui_app::screens::ScreenContext;
use crate::egui_app::session::Session;
use crate::egui_app::tasks::{PendingTask, TaskPoll};
use crate::shared::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPhase {
    Idle,
    Submitting,
    LoggedIn,
}

type LoginResult = Result<LoginOutcome, AuthError>;

pub struct LoginController {
    pub email: String,
    pub password: String,
    pub password_visible: bool,
    phase: LoginPhase,
    authenticator: RemoteAuthenticator,
    session: Session,
    pending: Option<PendingTask<LoginResult>>,
}

impl LoginController {
    pub fn new(authenticator: RemoteAuthenticator, session: Session) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            password_visible: false,
            phase: LoginPhase::Idle,
            authenticator,
            session,
            pending: None,
        }
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// A login screen gaining focus starts from an empty form
    pub fn on_focus(&mut self) {
        if self.phase == LoginPhase::Submitting {
            return;
        }
        self.email.clear();
        self.password.clear();
        self.password_visible = false;
        self.phase = LoginPhase::Idle;
    }

    /// Send the credentials; ignored while a request is outstanding
    pub fn submit(&mut self, cx: &mut ScreenContext<'_>) {
        if self.phase == LoginPhase::Submitting {
            return;
        }
        self.phase = LoginPhase::Submitting;

        let authenticator = self.authenticator.clone();
        let session = self.session.clone();
        let email = self.email.clone();
        let password = self.password.clone();

        tracing::info!(url = authenticator.url(), "Submitting login");
        self.pending = Some(cx.runner.spawn(async move {
            let outcome = authenticator.login(email, password).await?;
            if matches!(outcome, LoginOutcome::Authenticated { .. }) {
                session.set_logged_in().await?;
            }
            Ok(outcome)
        }));
    }

    pub fn poll(&mut self, cx: &mut ScreenContext<'_>) {
        let Some(task) = self.pending.as_ref() else {
            return;
        };
        let result = match task.poll() {
            TaskPoll::Pending => return,
            TaskPoll::Ready(result) => result,
            TaskPoll::Lost => {
                tracing::error!("Login task ended without a result");
                self.pending = None;
                self.phase = LoginPhase::Idle;
                cx.notices.alert("Error", "An unexpected error occurred");
                return;
            }
        };
        self.pending = None;

        match result {
            Ok(LoginOutcome::Authenticated { .. }) => {
                self.phase = LoginPhase::LoggedIn;
                cx.notices.alert("Login Successful", "You are logged in!");
                cx.navigate(Screen::Home);
            }
            Ok(LoginOutcome::Rejected) => {
                self.phase = LoginPhase::Idle;
                cx.notices.alert("Login Failed", "Invalid email or password");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                self.phase = LoginPhase::Idle;
                cx.notices.alert("Error", "An unexpected error occurred");
            }
        }
    }
}
