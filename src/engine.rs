//! The input-to-report state machine driven by the control loop.
//!
//! One [`Engine`] value owns all loop state: the three debounced key
//! channels, the encoder decoder, and the encoder-set lamp mode.  The loop
//! feeds it one [`InputSample`] per iteration and gets back either nothing
//! (steady state) or a full emission - one report and one LED color per
//! channel.
//!
//! Emission is edge-triggered but whole-frame: when *any* input changes,
//! all three channels are re-sent in channel-id order, each carrying the
//! updated global contact count.  Non-transitioning channels are re-emitted
//! on purpose - downstream consumers need the new count on contacts that
//! did not move.

use smart_leds::RGB8;

use crate::hid::{TouchPhase, TouchReport};
use crate::input::buttons::{ButtonTracker, Channel, CHANNEL_COUNT};
use crate::input::encoder::{Direction, EncoderDecoder};
use crate::input::{InputSample, Line};
use crate::leds::feedback_color;

/// Everything the loop sends out for one dirty iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Emission {
    /// One report per channel, in channel-id order.
    pub reports: [TouchReport; CHANNEL_COUNT],
    /// Feedback color per channel, same order.
    pub leds: [RGB8; CHANNEL_COUNT],
}

/// Control-loop state machine.
#[derive(Clone, Copy, Debug)]
pub struct Engine {
    tracker: ButtonTracker,
    encoder: EncoderDecoder,
    lamp: bool,
}

impl Engine {
    /// All channels released, lamp mode off.
    pub const fn new() -> Self {
        Self {
            tracker: ButtonTracker::new(),
            encoder: EncoderDecoder::new(),
            lamp: false,
        }
    }

    /// Encoder-set lamp mode (clockwise = on, counter-clockwise = off).
    pub fn lamp(&self) -> bool {
        self.lamp
    }

    /// Run one loop iteration against a fresh input snapshot.
    ///
    /// Returns `None` while every input is steady; the LED chain is still
    /// committed by the caller on those iterations.
    pub fn step(&mut self, sample: &InputSample) -> Option<Emission> {
        let poll = self.tracker.poll(sample);
        let mut dirty = poll.dirty;

        // A decoded detent dirties the iteration even when the lamp mode
        // keeps its previous value.
        if let Some(direction) = self
            .encoder
            .poll(sample.is_low(Line::EncoderA), sample.is_low(Line::EncoderB))
        {
            self.lamp = direction == Direction::Clockwise;
            dirty = true;
        }

        if !dirty {
            return None;
        }

        let channels = self.tracker.channels();
        let reports = core::array::from_fn(|i| report_for(&channels[i], poll.contact_count));
        let leds = core::array::from_fn(|i| feedback_color(channels[i].is_pressed(), self.lamp));

        Some(Emission { reports, leds })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn report_for(channel: &Channel, contact_count: u8) -> TouchReport {
    let phase = if channel.is_pressed() {
        TouchPhase::Down
    } else {
        TouchPhase::Up
    };
    TouchReport::build(phase, channel.id(), contact_count)
}
