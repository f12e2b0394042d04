//! Quadrature rotary encoder detent decoder.
//!
//! One direction event per detent: a falling edge on phase A decodes the
//! direction from phase B at that instant (B high = clockwise, B low =
//! counter-clockwise).
//!
//! The decoder is non-blocking: it compares A against the previous poll
//! instead of busy-waiting for the detent boundary, so a mechanically held
//! encoder can never stall the control loop.  The loop cadence (one poll per
//! debounce period) provides the elapsed-time guard; a short cooldown after
//! each decode suppresses contact-bounce retriggers.

use crate::config::ENCODER_COOLDOWN_TICKS;

/// Rotation direction of one detent.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Edge-triggered detent decoder over the A/B phase pair.
#[derive(Clone, Copy, Debug)]
pub struct EncoderDecoder {
    last_a_low: bool,
    cooldown: u8,
}

impl EncoderDecoder {
    pub const fn new() -> Self {
        Self {
            last_a_low: false,
            cooldown: 0,
        }
    }

    /// Feed one iteration's A/B levels (`true` = line low).
    ///
    /// Returns the decoded direction on A's falling edge, `None` otherwise.
    /// Holding A low yields exactly one event per detent.
    pub fn poll(&mut self, a_low: bool, b_low: bool) -> Option<Direction> {
        let falling_edge = a_low && !self.last_a_low;
        self.last_a_low = a_low;

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }
        if !falling_edge {
            return None;
        }

        self.cooldown = ENCODER_COOLDOWN_TICKS;
        Some(if b_low {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        })
    }
}

impl Default for EncoderDecoder {
    fn default() -> Self {
        Self::new()
    }
}
