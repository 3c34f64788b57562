//! App fixtures
//!
//! Builds an `AppState` over an in-memory store, with a scripted picker and
//! a fixed clock, pointed at a caller-supplied login URL.

use std::sync::Arc;
use std::time::{Duration, Instant};

use product_catalog::egui_app::config::Config;
use product_catalog::egui_app::screens::ScreenContext;
use product_catalog::egui_app::local_db::{LocalDatabase, ProductStore, PRODUCTS_KEY};
use product_catalog::egui_app::session::SESSION_KEY;
use product_catalog::egui_app::tasks::TaskRunner;
use product_catalog::egui_app::AppState;
use product_catalog::shared::{AppConfig, Product};

use super::picker::{FixedClock, ScriptedPicker};

/// Creation timestamp handed out by the fixture clock
pub const FIXED_NOW_MS: i64 = 1_717_171_717_171;

/// Unroutable login endpoint for tests that never authenticate
pub const UNUSED_AUTH_URL: &str = "http://127.0.0.1:9/api/login";

pub struct TestApp {
    pub state: AppState,
    pub db: LocalDatabase,
    pub store: ProductStore,
    pub picker: Arc<ScriptedPicker>,
    pub clock: Arc<FixedClock>,
}

pub struct TestAppBuilder {
    auth_url: String,
    api_key: Option<String>,
    logged_in: bool,
    raw_products: Option<String>,
    products: Vec<Product>,
}

impl TestApp {
    pub fn builder() -> TestAppBuilder {
        TestAppBuilder {
            auth_url: UNUSED_AUTH_URL.to_string(),
            api_key: None,
            logged_in: false,
            raw_products: None,
            products: Vec::new(),
        }
    }

    /// Tick until no controller waits on background work
    pub fn settle(&mut self) {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            self.state.tick(Instant::now());
            if !self.state.is_busy() {
                return;
            }
            assert!(Instant::now() < deadline, "background work did not finish");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.state.runner.block_on(future)
    }

    pub fn stored_products(&self) -> Vec<Product> {
        let store = self.store.clone();
        self.block_on(async move { store.list_products().await }).unwrap()
    }

    pub fn raw_products(&self) -> Option<String> {
        let db = self.db.clone();
        self.block_on(async move { db.get_item(PRODUCTS_KEY).await }).unwrap()
    }

    pub fn session_flag(&self) -> Option<String> {
        let db = self.db.clone();
        self.block_on(async move { db.get_item(SESSION_KEY).await }).unwrap()
    }

    pub fn toasts(&self) -> Vec<String> {
        self.state.notices.toast_messages()
    }

    pub fn alert_title(&self) -> Option<String> {
        self.state.notices.current_alert().map(|a| a.title.clone())
    }

    pub fn names(&self) -> Vec<String> {
        self.state.home.products().iter().map(|p| p.name.clone()).collect()
    }

    pub fn submit_login(&mut self, email: &str, password: &str) {
        let AppState {
            runner,
            nav,
            notices,
            login,
            ..
        } = &mut self.state;
        login.email = email.to_string();
        login.password = password.to_string();
        login.submit(&mut ScreenContext {
            runner: &*runner,
            nav: &mut *nav,
            notices: &mut *notices,
        });
    }

    pub fn open_add_product(&mut self) {
        let AppState {
            runner,
            nav,
            notices,
            home,
            ..
        } = &mut self.state;
        home.open_add_product(&mut ScreenContext {
            runner: &*runner,
            nav: &mut *nav,
            notices: &mut *notices,
        });
    }

    pub fn submit_product(&mut self, name: &str, price: &str) {
        let AppState {
            runner,
            nav,
            notices,
            add_product,
            ..
        } = &mut self.state;
        add_product.name = name.to_string();
        add_product.price = price.to_string();
        add_product.submit(&mut ScreenContext {
            runner: &*runner,
            nav: &mut *nav,
            notices: &mut *notices,
        });
    }

    pub fn search(&mut self, query: &str) {
        self.state.home.search(query, &self.state.runner);
    }

    pub fn delete(&mut self, id: i64) {
        self.state.home.delete(id, &self.state.runner);
    }

    pub fn select_image(&mut self) {
        self.state.add_product.select_image(&self.state.runner);
    }

    pub fn logout(&mut self) {
        self.state.home.logout(&self.state.runner);
    }
}

impl TestAppBuilder {
    pub fn auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn logged_in(mut self) -> Self {
        self.logged_in = true;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    /// Store this exact text under the products key
    pub fn with_raw_products(mut self, raw: impl Into<String>) -> Self {
        self.raw_products = Some(raw.into());
        self
    }

    pub fn build(self) -> TestApp {
        let runner = TaskRunner::new().unwrap();
        let db = runner.block_on(LocalDatabase::open_in_memory()).unwrap();
        let store = ProductStore::new(db.clone());

        runner.block_on(async {
            if self.logged_in {
                db.set_item(SESSION_KEY, "true").await.unwrap();
            }
            if let Some(ref raw) = self.raw_products {
                db.set_item(PRODUCTS_KEY, raw).await.unwrap();
            }
            for product in self.products.iter().cloned() {
                store.save_product(product).await.unwrap();
            }
        });

        let mut builder = AppConfig::builder().auth_url(self.auth_url);
        if let Some(key) = self.api_key {
            builder = builder.api_key(key);
        }
        let config = Config::with_builder(builder.http_timeout_secs(5)).unwrap();

        let picker = Arc::new(ScriptedPicker::new());
        let clock = Arc::new(FixedClock::new(FIXED_NOW_MS));
        let state = AppState::new(config, runner, db.clone(), picker.clone(), clock.clone()).unwrap();

        TestApp {
            state,
            db,
            store,
            picker,
            clock,
        }
    }
}

pub fn product(id: i64, name: &str, price: &str) -> Product {
    Product::new(id, name, price, format!("file:///images/{id}.png"))
}
