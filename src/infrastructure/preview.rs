use std::collections::HashMap;

use uuid::Uuid;

use crate::entities::asset::ImageFormat;

const PREVIEW_SCHEME: &str = "blob:preview/";

/// Short-lived handles standing in for the browser's object URLs. Each handle keeps the
/// previewed bytes alive until it is released, replaced or the owning form resets.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    live: HashMap<String, PreviewEntry>,
}

#[derive(Debug, Clone)]
struct PreviewEntry {
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, format: ImageFormat, bytes: Vec<u8>) -> String {
        let url = format!("{PREVIEW_SCHEME}{}", Uuid::new_v4());
        self.live.insert(url.clone(), PreviewEntry { format, bytes });
        url
    }

    /// Releases `previous` (if any) and issues a handle for the new image.
    pub fn replace(&mut self, previous: Option<&str>, format: ImageFormat, bytes: Vec<u8>) -> String {
        if let Some(previous) = previous {
            self.release(previous);
        }
        self.create(format, bytes)
    }

    pub fn release(&mut self, url: &str) -> bool {
        self.live.remove(url).is_some()
    }

    pub fn release_all(&mut self) -> usize {
        let released = self.live.len();
        self.live.clear();
        released
    }

    pub fn get(&self, url: &str) -> Option<(ImageFormat, &[u8])> {
        self.live.get(url).map(|entry| (entry.format, entry.bytes.as_slice()))
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
