//! Sprite asset collaborator
//!
//! Sprites are referred to by name in the simulation. A renderer resolves each
//! name through an [`AssetSource`] the first time it is drawn and keeps the
//! handle for the rest of the session.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::SimError;

/// Turns a sprite name into a renderer-specific handle
pub trait AssetSource {
    type Handle;

    fn load(&mut self, key: &str) -> Result<Self::Handle, SimError>;
}

/// Conventional on-disk location of a sprite
pub fn sprite_path(key: &str) -> PathBuf {
    PathBuf::from("sprites").join(format!("{key}.png"))
}

/// Loads each sprite once and hands out the cached handle afterwards
pub struct SpriteCache<S: AssetSource> {
    source: S,
    loaded: HashMap<String, S::Handle>,
}

impl<S: AssetSource> SpriteCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            loaded: HashMap::new(),
        }
    }

    pub fn get(&mut self, key: &str) -> Result<&S::Handle, SimError> {
        if !self.loaded.contains_key(key) {
            let handle = self.source.load(key)?;
            log::debug!("Loaded sprite {key}");
            self.loaded.insert(key.to_string(), handle);
        }
        self.loaded.get(key).ok_or_else(|| SimError::Asset {
            key: key.to_string(),
            reason: "missing from cache after load".to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

/// Resolves names to their conventional paths without touching the disk
#[derive(Debug, Clone, Copy, Default)]
pub struct PathAssets;

impl AssetSource for PathAssets {
    type Handle = PathBuf;

    fn load(&mut self, key: &str) -> Result<PathBuf, SimError> {
        if key.is_empty() {
            return Err(SimError::Asset {
                key: key.to_string(),
                reason: "empty sprite name".to_string(),
            });
        }
        Ok(sprite_path(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSource {
        loads: usize,
    }

    impl AssetSource for CountingSource {
        type Handle = usize;

        fn load(&mut self, _key: &str) -> Result<usize, SimError> {
            self.loads += 1;
            Ok(self.loads)
        }
    }

    #[test]
    fn test_each_sprite_loaded_once() {
        let mut cache = SpriteCache::new(CountingSource::default());
        assert_eq!(*cache.get("Su-55").unwrap(), 1);
        assert_eq!(*cache.get("planet-001").unwrap(), 2);
        assert_eq!(*cache.get("Su-55").unwrap(), 1);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.source.loads, 2);
    }

    #[test]
    fn test_path_assets() {
        let mut cache = SpriteCache::new(PathAssets);
        assert_eq!(
            cache.get("planet-002").unwrap(),
            &PathBuf::from("sprites/planet-002.png")
        );
        assert!(matches!(cache.get(""), Err(SimError::Asset { .. })));
    }
}
