//! Product list controller
//!
//! Search works on a snapshot: a non-empty query filters whatever list is
//! currently held, narrowing it further with each keystroke, and never
//! re-reads storage. Only an empty query, a delete, a refresh or a focus
//! reloads the full collection.
//!
//! Deletes run one at a time in click order; the list reloads once the
//! queue drains.

use std::collections::VecDeque;

use crate::egui_app::local_db::ProductStore;
use crate::egui_app::navigation::Screen;
use crate::egui_app::screens::ScreenContext;
use crate::egui_app::session::Session;
use crate::egui_app::tasks::{PendingTask, TaskPoll, TaskRunner};
use crate::shared::{Product, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    /// Mount, focus, cleared search, after delete
    Load,
    /// Pull-to-refresh
    Refresh,
}

type StorageTask<T> = PendingTask<Result<T, StorageError>>;

pub struct ProductListController {
    store: ProductStore,
    session: Session,
    products: Vec<Product>,
    pub search_query: String,
    loading: bool,
    refreshing: bool,
    fetch: Option<(FetchKind, StorageTask<Vec<Product>>)>,
    /// A load was requested while another fetch was in flight
    reload_queued: bool,
    delete: Option<StorageTask<()>>,
    /// Ids clicked while a delete was in flight
    delete_queue: VecDeque<i64>,
    /// Some delete in the current run succeeded
    deleted_any: bool,
    logout: Option<StorageTask<()>>,
}

impl ProductListController {
    pub fn new(store: ProductStore, session: Session) -> Self {
        Self {
            store,
            session,
            products: Vec::new(),
            search_query: String::new(),
            loading: false,
            refreshing: false,
            fetch: None,
            reload_queued: false,
            delete: None,
            delete_queue: VecDeque::new(),
            deleted_any: false,
            logout: None,
        }
    }

    /// Displayed products
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_busy(&self) -> bool {
        self.fetch.is_some()
            || self.delete.is_some()
            || !self.delete_queue.is_empty()
            || self.logout.is_some()
            || self.reload_queued
    }

    /// Screen mounted or brought back to the foreground
    pub fn on_focus(&mut self, cx: &mut ScreenContext<'_>) {
        if !self.session.is_logged_in() {
            tracing::info!("Not logged in, redirecting to login");
            cx.navigate(Screen::Login2);
            return;
        }
        self.load(cx.runner);
    }

    /// Reload the full collection. A request made while a fetch is in flight
    /// runs once that fetch finishes.
    pub fn load(&mut self, runner: &TaskRunner) {
        self.start_fetch(FetchKind::Load, runner);
    }

    /// Pull-to-refresh
    pub fn refresh(&mut self, runner: &TaskRunner) {
        self.start_fetch(FetchKind::Refresh, runner);
    }

    fn start_fetch(&mut self, kind: FetchKind, runner: &TaskRunner) {
        if self.fetch.is_some() {
            if kind == FetchKind::Load {
                self.reload_queued = true;
            }
            return;
        }
        match kind {
            FetchKind::Load => self.loading = true,
            FetchKind::Refresh => self.refreshing = true,
        }
        let store = self.store.clone();
        self.fetch = Some((kind, runner.spawn(async move { store.list_products().await })));
    }

    /// Update the query. Empty re-fetches; otherwise filters the held list.
    pub fn search(&mut self, query: impl Into<String>, runner: &TaskRunner) {
        self.search_query = query.into();
        if self.search_query.is_empty() {
            self.load(runner);
        } else {
            let query = self.search_query.clone();
            self.products.retain(|p| p.matches_query(&query));
        }
    }

    /// Delete, then reload the full collection regardless of any filter.
    /// A delete requested while another runs is queued behind it.
    pub fn delete(&mut self, id: i64, runner: &TaskRunner) {
        if self.delete.is_some() {
            tracing::debug!(id, queued = self.delete_queue.len() + 1, "Delete queued");
            self.delete_queue.push_back(id);
            return;
        }
        self.start_delete(id, runner);
    }

    fn start_delete(&mut self, id: i64, runner: &TaskRunner) {
        let store = self.store.clone();
        self.delete = Some(runner.spawn(async move { store.delete_product(id).await }));
    }

    pub fn open_add_product(&mut self, cx: &mut ScreenContext<'_>) {
        cx.navigate(Screen::AddProductPage);
    }

    pub fn logout(&mut self, runner: &TaskRunner) {
        if self.logout.is_some() {
            return;
        }
        let session = self.session.clone();
        self.logout = Some(runner.spawn(async move { session.invalidate().await }));
    }

    pub fn poll(&mut self, cx: &mut ScreenContext<'_>) {
        self.poll_fetch(cx);
        self.poll_delete(cx);
        self.poll_logout(cx);
    }

    fn poll_fetch(&mut self, cx: &mut ScreenContext<'_>) {
        let Some((kind, task)) = self.fetch.as_ref() else {
            return;
        };
        let kind = *kind;
        let result = match task.poll() {
            TaskPoll::Pending => return,
            TaskPoll::Ready(result) => Some(result),
            TaskPoll::Lost => None,
        };
        self.fetch = None;
        match kind {
            FetchKind::Load => self.loading = false,
            FetchKind::Refresh => self.refreshing = false,
        }

        match result {
            Some(Ok(products)) => {
                tracing::debug!(count = products.len(), "Products loaded");
                self.products = products;
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Fetching products failed");
                cx.notices.toast("Error fetching products");
            }
            None => cx.notices.toast("Error fetching products"),
        }

        if std::mem::take(&mut self.reload_queued) {
            self.load(cx.runner);
        }
    }

    fn poll_delete(&mut self, cx: &mut ScreenContext<'_>) {
        let Some(task) = self.delete.as_ref() else {
            return;
        };
        let succeeded = match task.poll() {
            TaskPoll::Pending => return,
            TaskPoll::Ready(Ok(())) => true,
            TaskPoll::Ready(Err(e)) => {
                tracing::warn!(error = %e, "Deleting product failed");
                false
            }
            TaskPoll::Lost => false,
        };
        self.delete = None;

        if succeeded {
            self.deleted_any = true;
        } else {
            cx.notices.toast("Error deleting product");
        }

        match self.delete_queue.pop_front() {
            Some(next) => self.start_delete(next, cx.runner),
            None => {
                if std::mem::take(&mut self.deleted_any) {
                    self.load(cx.runner);
                }
            }
        }
    }

    fn poll_logout(&mut self, cx: &mut ScreenContext<'_>) {
        let Some(task) = self.logout.as_ref() else {
            return;
        };
        let succeeded = match task.poll() {
            TaskPoll::Pending => return,
            TaskPoll::Ready(Ok(())) => true,
            TaskPoll::Ready(Err(e)) => {
                tracing::warn!(error = %e, "Logout failed");
                false
            }
            TaskPoll::Lost => false,
        };
        self.logout = None;

        if succeeded {
            self.products.clear();
            self.search_query.clear();
            cx.navigate(Screen::Login2);
        } else {
            cx.notices.toast("Error logging out");
        }
    }
}
