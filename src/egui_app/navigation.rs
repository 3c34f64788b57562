//! Navigation Router
//!
//! A stack of named screens. `navigate` follows stack-navigator rules: if the
//! target is already on the stack everything above it is popped, otherwise
//! the target is pushed. Each change of the top screen is recorded as a focus
//! event that the app hands to the newly focused controller.

use std::fmt;

use thiserror::Error;

/// Named screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Login entry point, registered only when launched logged out
    Login,
    /// Product list
    Home,
    AddProductPage,
    /// Second login entry point, the post-logout destination
    Login2,
}

impl Screen {
    pub fn name(self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Home => "Home",
            Screen::AddProductPage => "AddProductPage",
            Screen::Login2 => "Login2",
        }
    }

    /// Both login entries render the same login screen
    pub fn is_login(self) -> bool {
        matches!(self, Screen::Login | Screen::Login2)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("screen '{0}' is not registered")]
    UnknownScreen(Screen),
}

#[derive(Debug, Clone)]
pub struct Navigator {
    registered: Vec<Screen>,
    stack: Vec<Screen>,
    focus_event: Option<Screen>,
}

impl Navigator {
    /// Pick the registered screens and the initial route from the session
    /// flag read at launch.
    pub fn new(logged_in: bool) -> Self {
        let mut registered = Vec::with_capacity(4);
        if !logged_in {
            registered.push(Screen::Login);
        }
        registered.extend([Screen::Home, Screen::AddProductPage, Screen::Login2]);

        let initial = if logged_in { Screen::Home } else { Screen::Login };
        tracing::info!(initial = %initial, "Navigator created");
        Self {
            registered,
            stack: vec![initial],
            focus_event: Some(initial),
        }
    }

    /// Screen currently shown
    pub fn current(&self) -> Screen {
        // The stack is never emptied below its root
        self.stack.last().copied().unwrap_or(Screen::Home)
    }

    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }

    pub fn is_registered(&self, screen: Screen) -> bool {
        self.registered.contains(&screen)
    }

    pub fn navigate(&mut self, screen: Screen) -> Result<(), NavigationError> {
        if !self.is_registered(screen) {
            tracing::error!(screen = %screen, "Navigation to unregistered screen");
            return Err(NavigationError::UnknownScreen(screen));
        }
        let before = self.current();
        match self.stack.iter().position(|&s| s == screen) {
            Some(index) => self.stack.truncate(index + 1),
            None => self.stack.push(screen),
        }
        self.record_focus(before);
        Ok(())
    }

    /// Pop the top screen. Returns false at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let before = self.current();
        self.stack.pop();
        self.record_focus(before);
        true
    }

    /// Screen that gained focus since the last call, if any
    pub fn take_focus_event(&mut self) -> Option<Screen> {
        self.focus_event.take()
    }

    fn record_focus(&mut self, before: Screen) {
        let after = self.current();
        if after != before {
            tracing::debug!(from = %before, to = %after, "Screen focus changed");
            self.focus_event = Some(after);
        }
    }
}
