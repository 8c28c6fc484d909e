//! Platform abstraction layer
//!
//! The simulation talks to the outside world through three collaborators:
//! - Input events and held keys
//! - A frame clock that throttles to the target rate
//! - Sprite assets resolved by name

pub mod assets;
pub mod input;
pub mod time;

pub use assets::{AssetSource, PathAssets, SpriteCache};
pub use input::{InputEvent, InputSource, Key, KeyState, ScriptedFrame, ScriptedInput};
pub use time::{FixedClock, FpsCounter, FrameClock, ThrottledClock};
