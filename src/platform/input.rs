//! Input collaborator
//!
//! A source reports queued events (quit, key presses) and the held state of
//! the three flight keys, sampled once per frame.

use std::collections::VecDeque;

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Left,
    Right,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or process asked to terminate
    Quit,
    KeyDown(Key),
}

/// Held flight keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    pub fn to_tick_input(self) -> TickInput {
        TickInput {
            boost: self.up,
            turn_left: self.left,
            turn_right: self.right,
        }
    }
}

pub trait InputSource {
    /// Drain events queued since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Keys held right now
    fn held_keys(&mut self) -> KeyState;
}

/// One scripted frame of input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedFrame {
    pub events: Vec<InputEvent>,
    pub keys: KeyState,
}

impl ScriptedFrame {
    pub fn hold(keys: KeyState) -> Self {
        Self {
            events: Vec::new(),
            keys,
        }
    }
}

/// Plays back a fixed list of frames, then either repeats or quits
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    script: Vec<ScriptedFrame>,
    pending: VecDeque<ScriptedFrame>,
    repeat: bool,
    current: KeyState,
}

impl ScriptedInput {
    /// Play `script` once, then report `Quit`
    pub fn once(script: Vec<ScriptedFrame>) -> Self {
        Self {
            pending: script.iter().cloned().collect(),
            script,
            repeat: false,
            current: KeyState::default(),
        }
    }

    /// Play `script` over and over
    pub fn cycle(script: Vec<ScriptedFrame>) -> Self {
        Self {
            repeat: true,
            ..Self::once(script)
        }
    }

    /// Slow left turns with a boost every half second, for unattended runs
    pub fn demo_pattern() -> Self {
        let mut script = Vec::with_capacity(50);
        for frame in 0..50 {
            script.push(ScriptedFrame::hold(KeyState {
                up: frame % 25 == 0,
                left: frame < 10,
                right: false,
            }));
        }
        Self::cycle(script)
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        if self.pending.is_empty() && self.repeat {
            self.pending.extend(self.script.iter().cloned());
        }

        match self.pending.pop_front() {
            Some(frame) => {
                self.current = frame.keys;
                frame.events
            }
            None => {
                self.current = KeyState::default();
                vec![InputEvent::Quit]
            }
        }
    }

    fn held_keys(&mut self) -> KeyState {
        self.current
    }
}
