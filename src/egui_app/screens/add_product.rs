//! Add product controller
//!
//! `Editing -> Validating -> Submitting -> Done`, or back to `Editing` as
//! soon as one check fails. Checks run in a fixed order and the first
//! failure is the only one reported:
//!
//! 1. name and price present
//! 2. price is a positive number
//! 3. no stored product has the same name
//! 4. an image was selected
//!
//! Nothing is written to storage unless all four pass.

use std::sync::Arc;

use crate::egui_app::local_db::ProductStore;
use crate::egui_app::media_picker::{MediaPicker, PickerOptions, PickerResponse};
use crate::egui_app::navigation::Screen;
use crate::egui_app::screens::ScreenContext;
use crate::egui_app::tasks::{PendingTask, TaskPoll, TaskRunner};
use crate::shared::{parse_positive_price, Product, StorageError, ValidationError};

/// Source of product ids
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddProductPhase {
    Editing,
    Validating,
    Submitting,
    Done,
}

/// Form values captured when the user pressed "Add Product"
#[derive(Debug, Clone)]
struct Draft {
    name: String,
    price: String,
}

type StorageTask<T> = PendingTask<Result<T, StorageError>>;

pub struct AddProductController {
    pub name: String,
    pub price: String,
    image: Option<String>,
    phase: AddProductPhase,
    store: ProductStore,
    clock: Arc<dyn Clock>,
    picker: Arc<dyn MediaPicker>,
    duplicate_check: Option<(Draft, StorageTask<bool>)>,
    saving: Option<StorageTask<()>>,
    picking: Option<PendingTask<PickerResponse>>,
}

impl AddProductController {
    pub fn new(store: ProductStore, clock: Arc<dyn Clock>, picker: Arc<dyn MediaPicker>) -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            image: None,
            phase: AddProductPhase::Editing,
            store,
            clock,
            picker,
            duplicate_check: None,
            saving: None,
            picking: None,
        }
    }

    pub fn phase(&self) -> AddProductPhase {
        self.phase
    }

    /// Locator of the selected image
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.duplicate_check.is_some() || self.saving.is_some() || self.picking.is_some()
    }

    /// Saving indicator shown in place of the submit button
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, AddProductPhase::Validating | AddProductPhase::Submitting)
    }

    /// The screen was pushed again; start from an empty form
    pub fn on_focus(&mut self) {
        if !self.is_busy() {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.name.clear();
        self.price.clear();
        self.image = None;
        self.phase = AddProductPhase::Editing;
    }

    /// Checks 1 and 2, which need no storage access
    pub fn check_fields(name: &str, price: &str) -> Result<(), ValidationError> {
        if name.is_empty() || price.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if parse_positive_price(price).is_none() {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(())
    }

    pub fn submit(&mut self, cx: &mut ScreenContext<'_>) {
        if self.phase != AddProductPhase::Editing {
            return;
        }
        self.phase = AddProductPhase::Validating;

        if let Err(e) = Self::check_fields(&self.name, &self.price) {
            self.reject(e, cx);
            return;
        }

        let draft = Draft {
            name: self.name.clone(),
            price: self.price.clone(),
        };
        let store = self.store.clone();
        let name = draft.name.clone();
        let task = cx.runner.spawn(async move { store.is_duplicate(&name).await });
        self.duplicate_check = Some((draft, task));
    }

    /// Open the media picker; ignored while one is already open
    pub fn select_image(&mut self, runner: &TaskRunner) {
        if self.picking.is_some() {
            return;
        }
        let picker = Arc::clone(&self.picker);
        self.picking = Some(runner.spawn_blocking_thread(move || {
            picker.launch(&PickerOptions::default())
        }));
    }

    pub fn poll(&mut self, cx: &mut ScreenContext<'_>) {
        self.poll_duplicate_check(cx);
        self.poll_saving(cx);
        self.poll_picker(cx);
    }

    fn poll_duplicate_check(&mut self, cx: &mut ScreenContext<'_>) {
        let Some((_, task)) = self.duplicate_check.as_ref() else {
            return;
        };
        let result = match task.poll() {
            TaskPoll::Pending => return,
            TaskPoll::Ready(result) => Some(result),
            TaskPoll::Lost => None,
        };
        let Some((draft, _)) = self.duplicate_check.take() else {
            return;
        };

        match result {
            Some(Ok(true)) => self.reject(ValidationError::Duplicate, cx),
            Some(Ok(false)) => match self.image.clone() {
                None => self.reject(ValidationError::MissingImage, cx),
                Some(image) => self.start_save(draft, image, cx.runner),
            },
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Duplicate check failed");
                self.save_failed(cx);
            }
            None => self.save_failed(cx),
        }
    }

    fn start_save(&mut self, draft: Draft, image: String, runner: &TaskRunner) {
        self.phase = AddProductPhase::Submitting;
        let product = Product::new(self.clock.now_millis(), draft.name, draft.price, image);
        tracing::info!(id = product.id, name = %product.name, "Adding product");

        let store = self.store.clone();
        self.saving = Some(runner.spawn(async move { store.save_product(product).await }));
    }

    fn poll_saving(&mut self, cx: &mut ScreenContext<'_>) {
        let Some(task) = self.saving.as_ref() else {
            return;
        };
        let succeeded = match task.poll() {
            TaskPoll::Pending => return,
            TaskPoll::Ready(Ok(())) => true,
            TaskPoll::Ready(Err(e)) => {
                tracing::warn!(error = %e, "Saving product failed");
                false
            }
            TaskPoll::Lost => false,
        };
        self.saving = None;

        if succeeded {
            self.reset();
            self.phase = AddProductPhase::Done;
            // The user may have left the form while the save was running
            if cx.nav.current() == Screen::AddProductPage {
                cx.nav.go_back();
            }
        } else {
            self.save_failed(cx);
        }
    }

    fn poll_picker(&mut self, cx: &mut ScreenContext<'_>) {
        let Some(task) = self.picking.as_ref() else {
            return;
        };
        let response = match task.poll() {
            TaskPoll::Pending => return,
            TaskPoll::Ready(response) => response,
            TaskPoll::Lost => {
                self.picking = None;
                cx.notices.toast("Error: media picker closed unexpectedly");
                return;
            }
        };
        self.picking = None;

        match response {
            Ok(assets) => {
                if let Some(asset) = assets.into_iter().next() {
                    self.image = Some(asset.uri);
                }
            }
            Err(e) => cx.notices.toast(e.to_string()),
        }
    }

    fn reject(&mut self, error: ValidationError, cx: &mut ScreenContext<'_>) {
        tracing::debug!(reason = %error, "Product rejected");
        self.phase = AddProductPhase::Editing;
        cx.notices.toast(error.to_string());
    }

    fn save_failed(&mut self, cx: &mut ScreenContext<'_>) {
        self.phase = AddProductPhase::Editing;
        cx.notices.toast("Error saving product");
    }
}
