//! Rendering contract
//!
//! The renderer proper (device, surface, rasterisation) lives outside this
//! crate behind [`Surface`]. This module fixes what gets drawn and in which
//! order: background, starfield, game entities, then the score on top.

pub mod headless;

use glam::Vec2;

pub use headless::{DrawCall, HeadlessSurface};

use crate::consts::{BACKGROUND_COLOR, SCORE_COLOR, SCORE_POSITION, SCORE_SIZE};
use crate::error::SimError;
use crate::sim::{GameState, Sprite};

pub type Rgb = [u8; 3];

/// Axis-aligned draw rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl DrawRect {
    /// Rectangle for `sprite` centred on `centre`
    pub fn centred(sprite: &Sprite, centre: Vec2) -> Self {
        Self {
            origin: sprite.top_left(centre),
            size: sprite.size,
        }
    }
}

/// Anything that can put sprites and text on screen
pub trait Surface {
    fn clear(&mut self, color: Rgb);

    /// Draw `sprite` into `rect`, rotated by `rotation` degrees
    fn draw_sprite(&mut self, sprite: &Sprite, rect: DrawRect, rotation: f32) -> Result<(), SimError>;

    fn draw_text(&mut self, text: &str, rect: DrawRect, color: Rgb) -> Result<(), SimError>;

    /// Show the finished frame
    fn present(&mut self) -> Result<(), SimError>;
}

/// Score readout text
pub fn score_text(score: u64) -> String {
    format!("Score: {score}")
}

/// Draw one complete frame of `state`
pub fn render_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState) -> Result<(), SimError> {
    surface.clear(BACKGROUND_COLOR);

    let star_sprite = &state.starfield.sprite;
    for star in state.starfield.alive() {
        surface.draw_sprite(star_sprite, DrawRect::centred(star_sprite, star.body.pos), 0.0)?;
    }

    for entity in state.world.iter().filter(|e| e.body.alive) {
        let rect = DrawRect {
            origin: entity.draw_position(),
            size: entity.sprite.size,
        };
        surface.draw_sprite(&entity.sprite, rect, entity.rotation())?;
    }

    let score_rect = DrawRect {
        origin: SCORE_POSITION,
        size: SCORE_SIZE,
    };
    surface.draw_text(&score_text(state.score()), score_rect, SCORE_COLOR)?;

    surface.present()
}
