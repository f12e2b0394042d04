//! Debounced press/release tracking for the three key channels.
//!
//! Each channel is fed by a *set* of physical lines; any line in the set
//! reading low counts as pressed.  Channel 3 accepts either its key or the
//! encoder push switch, so the edge-detection logic stays uniform across
//! channels.
//!
//! There is no per-channel timer: the fixed delay at the top of every loop
//! iteration is the sole debounce mechanism, so a channel is sampled at most
//! once per debounce period.

use crate::input::{InputSample, Line};

/// Number of key channels (and virtual touch contacts).
pub const CHANNEL_COUNT: usize = 3;

/// Line sources per channel, indexed by channel id - 1.
pub const CHANNEL_SOURCES: [&[Line]; CHANNEL_COUNT] = [
    &[Line::Key1],
    &[Line::Key2],
    &[Line::Key3, Line::EncoderSwitch],
];

/// Debounced state of one key channel.
#[derive(Clone, Copy, Debug)]
pub struct Channel {
    id: u8,
    pressed: bool,
}

impl Channel {
    const fn new(id: u8) -> Self {
        Self { id, pressed: false }
    }

    /// Contact identifier carried in HID reports (1-based).
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Current debounced press state.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Record this iteration's sampled state.
    ///
    /// Returns `true` when the debounced state changed (press or release
    /// edge), `false` while the state is steady.
    fn update(&mut self, pressed_now: bool) -> bool {
        if pressed_now == self.pressed {
            return false;
        }
        self.pressed = pressed_now;
        true
    }
}

/// Result of polling all channels for one iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonPoll {
    /// At least one channel changed state this iteration.
    pub dirty: bool,
    /// Number of channels currently pressed - includes channels that were
    /// already pressed on a prior iteration, not just the ones that changed.
    pub contact_count: u8,
}

/// Tracks debounced press state across all three channels.
#[derive(Clone, Copy, Debug)]
pub struct ButtonTracker {
    channels: [Channel; CHANNEL_COUNT],
}

impl ButtonTracker {
    pub const fn new() -> Self {
        Self {
            channels: [Channel::new(1), Channel::new(2), Channel::new(3)],
        }
    }

    /// Sample every channel from the given snapshot, detect edges, and
    /// tally the live contact count.
    pub fn poll(&mut self, sample: &InputSample) -> ButtonPoll {
        let mut dirty = false;
        let mut contact_count = 0;

        for (channel, sources) in self.channels.iter_mut().zip(CHANNEL_SOURCES) {
            let pressed_now = sample.any_low(sources);
            if channel.update(pressed_now) {
                dirty = true;
            }
            if channel.is_pressed() {
                contact_count += 1;
            }
        }

        ButtonPoll {
            dirty,
            contact_count,
        }
    }

    /// Per-channel state in channel-id order.
    pub fn channels(&self) -> &[Channel; CHANNEL_COUNT] {
        &self.channels
    }
}

impl Default for ButtonTracker {
    fn default() -> Self {
        Self::new()
    }
}
