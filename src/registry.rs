use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::dlog;
use crate::image::Image;
use crate::tga::TgaError;

/// Loads images by path and keeps them alive for its whole lifetime, so a
/// sprite sheet is read from disk once no matter how many frames draw from
/// it.
///
/// The cache belongs to whoever drives the rendering and nothing here is
/// process-global. Entries are never evicted or reloaded; a failed load
/// leaves no entry behind, so a later [`ImageCache::get`] for the same path
/// tries again.
pub struct ImageCache {
    images: FxHashMap<String, Image>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self {
            images: FxHashMap::default(),
        }
    }

    /// Returns the image cached under `path`, loading it on the first
    /// request
    pub fn get(&mut self, path: &str) -> Result<&Image, TgaError> {
        match self.images.entry(path.to_owned()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(slot) => {
                dlog!("image cache miss: {path}");
                let mut image = Image::default();
                image.load_tga(path)?;
                image.set_name(path);
                Ok(slot.insert(image))
            }
        }
    }

    /// Registers an already-built image under `name`, replacing whatever
    /// was cached there before
    pub fn insert(&mut self, name: &str, mut image: Image) {
        image.set_name(name);
        self.images.insert(name.to_owned(), image);
    }

    /// Returns whether an image is cached under `path`
    pub fn contains(&self, path: &str) -> bool {
        self.images.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}
