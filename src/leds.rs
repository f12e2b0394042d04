//! Addressable LED feedback - per-channel color mapping and a buffered
//! frame committed to the chain once per loop iteration.

use smart_leds::{SmartLedsWrite, RGB8};

use crate::config::{LED_LAMP_DIM, LED_PRESSED};

/// Number of pixels in the chain (one per key channel).
pub const LED_COUNT: usize = 3;

const fn rgb((r, g, b): (u8, u8, u8)) -> RGB8 {
    RGB8 { r, g, b }
}

/// Feedback color for one channel.
///
/// Pressed wins over everything; a released channel shows the dim accent
/// while the encoder lamp mode is on, and is dark otherwise.
pub fn feedback_color(pressed: bool, lamp: bool) -> RGB8 {
    if pressed {
        rgb(LED_PRESSED)
    } else if lamp {
        rgb(LED_LAMP_DIM)
    } else {
        RGB8::default()
    }
}

/// Buffered frame for the LED chain.
///
/// Colors are staged with [`set`](Self::set) / [`clear`](Self::clear) and
/// only reach the physical chain on [`commit`](Self::commit).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedFrame {
    pixels: [RGB8; LED_COUNT],
}

impl LedFrame {
    pub const fn new() -> Self {
        Self {
            pixels: [RGB8 { r: 0, g: 0, b: 0 }; LED_COUNT],
        }
    }

    /// Stage a color for one pixel.
    pub fn set(&mut self, index: usize, color: RGB8) {
        self.pixels[index] = color;
    }

    /// Stage one pixel dark.
    pub fn clear(&mut self, index: usize) {
        self.pixels[index] = RGB8::default();
    }

    /// Stage every pixel to the same color.
    pub fn fill(&mut self, color: RGB8) {
        self.pixels = [color; LED_COUNT];
    }

    /// Currently staged colors.
    pub fn pixels(&self) -> &[RGB8; LED_COUNT] {
        &self.pixels
    }

    /// Flush the staged frame to the chain.
    pub fn commit<S>(&self, strip: &mut S) -> Result<(), S::Error>
    where
        S: SmartLedsWrite<Color = RGB8>,
    {
        strip.write(self.pixels.iter().copied())
    }
}
