//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// Timing

/// Debounce period (ms). The loop runs one iteration per period; this fixed
/// delay at the top of the loop is the only debounce mechanism.
pub const DEBOUNCE_MS: u64 = 10;

/// Number of polls after a decoded detent during which further encoder
/// edges are ignored (contact-bounce suppression).
pub const ENCODER_COOLDOWN_TICKS: u8 = 1;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "tritouch";
pub const USB_PRODUCT: &str = "Three-Key Touch Macropad";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 1;

// Touch digitizer

/// Logical coordinate grid maximum for both axes.
pub const TOUCH_GRID_MAX: u16 = 10_000;

/// Pressure reported while a contact is down.
pub const TOUCH_PRESSURE: u8 = 0x7F;

/// Fixed virtual touch point per channel, indexed by channel id - 1.
pub const TOUCH_POINTS: [(u16, u16); 3] = [
    (0x03FA, 0x01F4), // channel 1
    (0x1388, 0x1388), // channel 2 (grid center)
    (0x20F3, 0x2439), // channel 3
];

// LED feedback

/// RGB value shown while a channel is pressed.
pub const LED_PRESSED: (u8, u8, u8) = (25, 19, 0);

/// RGB value shown on released channels while the encoder lamp mode is on.
pub const LED_LAMP_DIM: (u8, u8, u8) = (15, 5, 0);

/// RGB value shown on every pixel when handing off to the bootloader.
pub const LED_BOOT: (u8, u8, u8) = (127, 127, 127);

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Key 1           → P0.11
//   Key 2           → P0.12
//   Key 3           → P0.24
//   Encoder switch  → P0.25
//   Encoder A       → P0.29
//   Encoder B       → P0.28
//   WS2812 data     → P0.16 (SPIM3 MOSI)
//   Status LED      → P0.06

// Bootloader

/// GPREGRET value that makes the Adafruit nRF52 UF2 bootloader stay in
/// serial DFU mode after the soft reset.
pub const BOOTLOADER_DFU_MAGIC: u8 = 0x57;
