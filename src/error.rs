//! Unified error type for the embedded transports.
//!
//! The pure input engine has no error states - all of its failure modes are
//! physical or timing related and are suppressed, not reported.  This enum
//! only names the fire-and-forget transport failures so they can be logged
//! at the boundary; nothing is retried.

use defmt::Format;

/// Top-level error type used by the firmware binary.
#[derive(Debug, Format)]
pub enum Error {
    /// USB HID endpoint write failed (endpoint disabled or bus reset).
    Usb,

    /// SPI transfer to the LED chain failed.
    Led,
}
