//! Screen Controllers
//!
//! Each controller owns the transient state of one screen and drives the
//! storage and network work behind it. The egui views only read controller
//! state and forward user actions; results come back through
//! [`PendingTask`](crate::egui_app::tasks::PendingTask)s that the app polls
//! once per frame.
//!
//! - **`login`** - credentials form and the remote login call
//! - **`home`** - product list, search, delete, refresh, logout
//! - **`add_product`** - new product form, validation and image selection

pub mod login;
pub mod home;
pub mod add_product;

pub use login::{LoginController, LoginPhase};
pub use home::ProductListController;
pub use add_product::{AddProductController, AddProductPhase, Clock, SystemClock};

use crate::egui_app::navigation::Navigator;
use crate::egui_app::notifications::Notifications;
use crate::egui_app::tasks::TaskRunner;

/// App-wide collaborators a controller needs while handling an action or
/// a finished task
pub struct ScreenContext<'a> {
    pub runner: &'a TaskRunner,
    pub nav: &'a mut Navigator,
    pub notices: &'a mut Notifications,
}

impl ScreenContext<'_> {
    /// Navigate, logging rather than failing on an unregistered target
    pub fn navigate(&mut self, screen: crate::egui_app::navigation::Screen) {
        if let Err(e) = self.nav.navigate(screen) {
            tracing::error!(error = %e, "Navigation failed");
        }
    }
}
