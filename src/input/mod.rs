//! Physical input model - raw line levels and per-channel press tracking.
//!
//! All button and encoder lines are active-low (internal pull-up, switch to
//! ground).  The hardware layer snapshots every line once per loop iteration
//! into an [`InputSample`]; everything downstream works on that snapshot, so
//! the whole input path is testable on the host.

pub mod buttons;
pub mod encoder;

/// Physical input lines.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    Key1,
    Key2,
    Key3,
    EncoderSwitch,
    EncoderA,
    EncoderB,
}

/// Number of physical input lines.
pub const LINE_COUNT: usize = 6;

/// One iteration's snapshot of raw line levels.
///
/// `true` means the line reads electrically high (idle); active-low inputs
/// read `false` when actuated.
#[derive(Clone, Copy, Debug)]
pub struct InputSample {
    levels: [bool; LINE_COUNT],
}

impl InputSample {
    /// Snapshot with every line high (nothing actuated).
    pub const fn idle() -> Self {
        Self {
            levels: [true; LINE_COUNT],
        }
    }

    /// Set the raw level of one line.
    pub fn set_level(&mut self, line: Line, high: bool) {
        self.levels[line as usize] = high;
    }

    /// Pull one line low, consuming and returning the sample.
    /// Convenient for building test fixtures.
    pub fn with_low(mut self, line: Line) -> Self {
        self.set_level(line, false);
        self
    }

    /// Whether the line currently reads low (actuated).
    pub fn is_low(&self, line: Line) -> bool {
        !self.levels[line as usize]
    }

    /// Whether any of the given lines reads low.
    pub fn any_low(&self, lines: &[Line]) -> bool {
        lines.iter().any(|&line| self.is_low(line))
    }
}

impl Default for InputSample {
    fn default() -> Self {
        Self::idle()
    }
}
