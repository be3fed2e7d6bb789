//! Game loop
//!
//! One iteration, all on the calling thread:
//! 1. Drain pending input events in arrival order
//! 2. Promote at most one fresh command (the last press in the drain)
//! 3. Fire any due auto-repeat
//! 4. Advance the playfield by the measured delta and redraw

use crate::input::{AutoRepeat, Command, Controllers, InputEvent, RepeatTiming, translate_key};
use crate::platform::{Clock, InputSource};
use crate::playfield::Playfield;
use crate::renderer::Surface;

/// Whether the loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Result of draining one batch of events
#[derive(Debug, Default)]
struct Drain {
    /// Last command pressed during the drain
    fresh: Command,
    /// `fresh` was also released during the drain
    fresh_released: bool,
    quit: bool,
}

pub struct Game<S: Surface, I: InputSource, C: Clock> {
    playfield: Playfield<S>,
    input: I,
    clock: C,
    repeat: AutoRepeat,
    controllers: Controllers,
    frames: u64,
    presses: u64,
    repeats: u64,
}

impl<S: Surface, I: InputSource, C: Clock> Game<S, I, C> {
    pub fn new(playfield: Playfield<S>, input: I, clock: C, timing: RepeatTiming) -> Self {
        Self {
            playfield,
            input,
            clock,
            repeat: AutoRepeat::new(timing),
            controllers: Controllers::new(),
            frames: 0,
            presses: 0,
            repeats: 0,
        }
    }

    pub fn playfield(&self) -> &Playfield<S> {
        &self.playfield
    }

    pub fn playfield_mut(&mut self) -> &mut Playfield<S> {
        &mut self.playfield
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn repeat(&self) -> &AutoRepeat {
        &self.repeat
    }

    pub fn controllers(&self) -> &Controllers {
        &self.controllers
    }

    /// Completed loop iterations
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Commands fired directly by a press
    pub fn presses(&self) -> u64 {
        self.presses
    }

    /// Commands fired by auto-repeat
    pub fn repeats(&self) -> u64 {
        self.repeats
    }

    /// Run until a quit, or until `max_frames` iterations when given
    pub fn run(&mut self, max_frames: Option<u64>) -> u64 {
        let start = self.frames;
        while max_frames.is_none_or(|max| self.frames - start < max) {
            if self.step() == LoopControl::Exit {
                break;
            }
        }
        self.frames - start
    }

    /// One loop iteration
    pub fn step(&mut self) -> LoopControl {
        let now = self.clock.now_ms();
        let drain = self.drain_events(now);

        if drain.quit || drain.fresh == Command::Quit {
            log::info!("Quit after {} frames", self.frames);
            self.repeat.clear();
            return LoopControl::Exit;
        }

        if drain.fresh != Command::None {
            self.repeat.press(drain.fresh, now);
            self.fire(drain.fresh);
            self.presses += 1;
            if drain.fresh_released {
                self.repeat.release(drain.fresh);
            }
        }

        if let Some(command) = self.repeat.poll(now) {
            self.fire(command);
            self.repeats += 1;
        }

        let delta = self.clock.tick();
        self.playfield.update(delta);
        self.frames += 1;
        LoopControl::Continue
    }

    fn drain_events(&mut self, now: u64) -> Drain {
        let mut drain = Drain::default();
        while let Some(event) = self.input.poll_event(now) {
            match event {
                InputEvent::Quit => {
                    drain.quit = true;
                    break;
                }
                InputEvent::KeyDown { key, repeat } => {
                    Self::pressed(&mut drain, translate_key(key, repeat));
                }
                InputEvent::KeyUp { key } => {
                    self.released(&mut drain, translate_key(key, false));
                }
                InputEvent::ButtonDown { controller, button } => {
                    Self::pressed(&mut drain, self.controllers.translate(controller, button));
                }
                InputEvent::ButtonUp { controller, button } => {
                    let command = self.controllers.translate(controller, button);
                    self.released(&mut drain, command);
                }
                InputEvent::ControllerAdded {
                    controller,
                    name,
                    supported,
                } => {
                    self.controllers.attach(controller, &name, supported);
                }
                InputEvent::ControllerRemoved { controller } => {
                    self.controllers.detach(controller);
                }
            }
        }
        drain
    }

    fn pressed(drain: &mut Drain, command: Command) {
        if command == Command::None {
            return;
        }
        drain.fresh = command;
        drain.fresh_released = false;
    }

    fn released(&mut self, drain: &mut Drain, command: Command) {
        if command == Command::None {
            return;
        }
        self.repeat.release(command);
        if command == drain.fresh {
            drain.fresh_released = true;
        }
    }

    fn fire(&mut self, command: Command) {
        self.playfield.apply_command(command);
    }
}
