//! Scripted collaborators for controller tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use product_catalog::egui_app::media_picker::{Asset, MediaPicker, PickerOptions, PickerResponse};
use product_catalog::egui_app::screens::Clock;
use product_catalog::shared::MediaPickerError;

/// Returns queued responses in order, then cancels
#[derive(Default)]
pub struct ScriptedPicker {
    responses: Mutex<VecDeque<PickerResponse>>,
}

impl ScriptedPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: PickerResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn push_image(&self, uri: &str) {
        self.push(Ok(vec![Asset {
            uri: uri.to_string(),
            file_name: uri.rsplit('/').next().map(str::to_string),
        }]));
    }
}

impl MediaPicker for ScriptedPicker {
    fn launch(&self, options: &PickerOptions) -> PickerResponse {
        assert_eq!(options.quality, 1.0);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(MediaPickerError::Cancelled))
    }
}

/// Clock returning a settable instant
pub struct FixedClock(AtomicI64);

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self(AtomicI64::new(millis))
    }

    pub fn set(&self, millis: i64) {
        self.0.store(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}
