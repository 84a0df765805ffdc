use cropbox_core::error::{CropboxError, Result};

/// System clipboard handle, opened on first use.
///
/// The handle is kept for the lifetime of the app: on X11 and Wayland the
/// copied text disappears once its owner is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn copy(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(c) => c,
            None => arboard::Clipboard::new().map_err(|e| CropboxError::Clipboard(e.to_string()))?,
        };
        self.inner
            .insert(clipboard)
            .set_text(text.to_owned())
            .map_err(|e| CropboxError::Clipboard(e.to_string()))
    }
}
