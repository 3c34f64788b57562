use std::sync::Arc;
use std::time::Instant;

use crate::egui_app::auth::RemoteAuthenticator;
use crate::egui_app::config::Config;
use crate::egui_app::local_db::{LocalDatabase, ProductStore};
use crate::egui_app::media_picker::{MediaPicker, NativeMediaPicker};
use crate::egui_app::navigation::{Navigator, Screen};
use crate::egui_app::notifications::Notifications;
use crate::egui_app::screens::{
    AddProductController, Clock, LoginController, ProductListController, ScreenContext, SystemClock,
};
use crate::egui_app::session::Session;
use crate::egui_app::tasks::TaskRunner;
use crate::shared::error::Result;

/// Upper bound on focus hand-offs per frame (Home may redirect to Login2)
const MAX_FOCUS_HOPS: usize = 4;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub runner: TaskRunner,
    pub session: Session,
    pub nav: Navigator,
    pub notices: Notifications,
    pub login: LoginController,
    pub home: ProductListController,
    pub add_product: AddProductController,
}

impl AppState {
    /// Open the on-disk store and build the app with the native picker
    pub fn bootstrap(config: Config) -> Result<Self> {
        let runner = TaskRunner::new()?;
        let db = runner.block_on(async {
            match config.data_dir() {
                Some(dir) => LocalDatabase::open_in(dir).await,
                None => LocalDatabase::open_default().await,
            }
        })?;
        Self::new(
            config,
            runner,
            db,
            Arc::new(NativeMediaPicker),
            Arc::new(SystemClock),
        )
    }

    /// Wire controllers around an already opened store. The session flag is
    /// read once here and decides the initial screen.
    pub fn new(
        config: Config,
        runner: TaskRunner,
        db: LocalDatabase,
        picker: Arc<dyn MediaPicker>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let session = runner.block_on(Session::init(db.clone()))?;
        let store = ProductStore::new(db);
        let authenticator = RemoteAuthenticator::new(&config)?;

        Ok(Self {
            nav: Navigator::new(session.is_logged_in()),
            notices: Notifications::new(),
            login: LoginController::new(authenticator, session.clone()),
            home: ProductListController::new(store.clone(), session.clone()),
            add_product: AddProductController::new(store, clock, picker),
            config,
            runner,
            session,
        })
    }

    pub fn current_screen(&self) -> Screen {
        self.nav.current()
    }

    /// Collaborators for one controller call
    pub fn context(&mut self) -> ScreenContext<'_> {
        ScreenContext {
            runner: &self.runner,
            nav: &mut self.nav,
            notices: &mut self.notices,
        }
    }

    /// Once per frame: collect finished work, deliver focus events, expire toasts
    pub fn tick(&mut self, now: Instant) {
        let mut cx = ScreenContext {
            runner: &self.runner,
            nav: &mut self.nav,
            notices: &mut self.notices,
        };

        self.login.poll(&mut cx);
        self.home.poll(&mut cx);
        self.add_product.poll(&mut cx);

        for _ in 0..MAX_FOCUS_HOPS {
            let Some(screen) = cx.nav.take_focus_event() else {
                break;
            };
            match screen {
                Screen::Login | Screen::Login2 => self.login.on_focus(),
                Screen::Home => self.home.on_focus(&mut cx),
                Screen::AddProductPage => self.add_product.on_focus(),
            }
        }

        cx.notices.expire(now);
    }

    /// Whether any controller still waits on background work
    pub fn is_busy(&self) -> bool {
        self.login.is_busy() || self.home.is_busy() || self.add_product.is_busy()
    }
}
