//! Headless surface
//!
//! Records the draw calls of the latest frame instead of rasterising them.
//! Used for unattended runs and for checking the draw contract in tests.

use std::path::PathBuf;

use super::{DrawRect, Rgb, Surface};
use crate::error::SimError;
use crate::platform::{PathAssets, SpriteCache};
use crate::sim::Sprite;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgb),
    Sprite {
        key: String,
        path: PathBuf,
        rect: DrawRect,
        rotation: f32,
    },
    Text {
        text: String,
        rect: DrawRect,
        color: Rgb,
    },
}

pub struct HeadlessSurface {
    sprites: SpriteCache<PathAssets>,
    building: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    frames_presented: u64,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            sprites: SpriteCache::new(PathAssets),
            building: Vec::new(),
            last_frame: Vec::new(),
            frames_presented: 0,
        }
    }

    /// Calls that made up the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Distinct sprites resolved so far
    pub fn sprites_loaded(&self) -> usize {
        self.sprites.len()
    }

    /// Text of the last score readout drawn
    pub fn last_text(&self) -> Option<&str> {
        self.last_frame.iter().rev().find_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for HeadlessSurface {
    fn clear(&mut self, color: Rgb) {
        self.building.clear();
        self.building.push(DrawCall::Clear(color));
    }

    fn draw_sprite(&mut self, sprite: &Sprite, rect: DrawRect, rotation: f32) -> Result<(), SimError> {
        let path = self.sprites.get(&sprite.key)?.clone();
        self.building.push(DrawCall::Sprite {
            key: sprite.key.clone(),
            path,
            rect,
            rotation,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, rect: DrawRect, color: Rgb) -> Result<(), SimError> {
        self.building.push(DrawCall::Text {
            text: text.to_string(),
            rect,
            color,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<(), SimError> {
        self.last_frame = std::mem::take(&mut self.building);
        self.frames_presented += 1;
        Ok(())
    }
}
