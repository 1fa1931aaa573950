//! Keyboard input, sampled once per frame

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::EventPump;

use crate::game::TickInput;

/// Everything the frame loop needs to know about the player this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Window closed or Escape pressed
    pub quit: bool,
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
    /// R pressed this frame
    pub restart: bool,
    /// F pressed this frame
    pub toggle_fps: bool,
}

impl FrameInput {
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            restart: self.restart,
        }
    }
}

/// Source of per-frame input
pub trait InputSource {
    /// Drain pending events and sample held keys
    fn poll(&mut self) -> FrameInput;
}

/// SDL2 keyboard: arrows are read as held state, R/F/Escape as key presses
pub struct KeyboardInput {
    event_pump: EventPump,
}

impl KeyboardInput {
    pub fn new(event_pump: EventPump) -> Self {
        Self { event_pump }
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> FrameInput {
        let mut input = FrameInput::default();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => input.quit = true,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => match key {
                    Keycode::Escape => input.quit = true,
                    Keycode::R => input.restart = true,
                    Keycode::F => input.toggle_fps = true,
                    _ => {},
                },
                _ => {},
            }
        }

        let keys = self.event_pump.keyboard_state();
        input.left = keys.is_scancode_pressed(Scancode::Left);
        input.right = keys.is_scancode_pressed(Scancode::Right);

        input
    }
}

/// Replays a fixed list of frames, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: std::collections::VecDeque<FrameInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Queue `count` frames of the same input
    pub fn push_repeat(&mut self, input: FrameInput, count: usize) {
        self.frames.extend(std::iter::repeat(input).take(count));
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> FrameInput {
        self.frames.pop_front().unwrap_or(FrameInput {
            quit: true,
            ..FrameInput::default()
        })
    }
}
