//! Device media picker
//!
//! Image selection is delegated to a [`MediaPicker`]. The desktop build uses
//! the native file dialog through `rfd`; tests supply scripted pickers.

use std::path::Path;

use crate::shared::MediaPickerError;

/// Kind of media the picker should offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Photo,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerOptions {
    pub media_type: MediaType,
    /// 0.0 ..= 1.0, where 1.0 keeps the original image
    pub quality: f32,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            media_type: MediaType::Photo,
            quality: 1.0,
        }
    }
}

/// One selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Local file locator, e.g. `file:///home/me/pic.png`
    pub uri: String,
    pub file_name: Option<String>,
}

impl Asset {
    pub fn from_path(path: &Path) -> Result<Self, MediaPickerError> {
        let path = path.to_str().ok_or_else(|| MediaPickerError::Failed {
            code: "others".to_string(),
            message: "Selected path is not valid UTF-8".to_string(),
        })?;
        let file_name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string);
        let uri = if path.starts_with('/') {
            format!("file://{path}")
        } else {
            format!("file:///{}", path.replace('\\', "/"))
        };
        Ok(Self { uri, file_name })
    }
}

pub type PickerResponse = Result<Vec<Asset>, MediaPickerError>;

/// External media picker collaborator
///
/// `launch` may block until the user decides; callers run it off the UI
/// thread.
pub trait MediaPicker: Send + Sync {
    fn launch(&self, options: &PickerOptions) -> PickerResponse;
}

/// Extensions offered for `MediaType::Photo`
pub const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "heic"];

/// Native file dialog picker
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeMediaPicker;

impl MediaPicker for NativeMediaPicker {
    fn launch(&self, options: &PickerOptions) -> PickerResponse {
        let dialog = match options.media_type {
            MediaType::Photo => rfd::FileDialog::new()
                .set_title("Select product image")
                .add_filter("Images", PHOTO_EXTENSIONS),
        };

        let Some(path) = dialog.pick_file() else {
            return Err(MediaPickerError::Cancelled);
        };

        if !path.is_file() {
            return Err(MediaPickerError::Failed {
                code: "others".to_string(),
                message: format!("{} is not a readable file", path.display()),
            });
        }

        tracing::debug!(path = %path.display(), "Image selected");
        Asset::from_path(&path).map(|asset| vec![asset])
    }
}
