//! USB HID multi-touch digitizer report.
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0:   Contact count (number of channels currently pressed)
//! Byte 1:   Contact identifier (1..=3)
//! Byte 2:   Flags - bit 0 = tip switch, bit 1 = in range
//! Byte 3:   Pressure (0..127)
//! Byte 4-5: X position, little-endian, logical 0..10000
//! Byte 6-7: Y position, little-endian, logical 0..10000
//! ```
//!
//! Reports are built fresh each time by a pure constructor; nothing mutates
//! a shared template in place.

use crate::config::{TOUCH_GRID_MAX, TOUCH_POINTS, TOUCH_PRESSURE};

/// Touch report size in bytes.
pub const TOUCH_REPORT_SIZE: usize = 8;

/// Tip-switch + in-range flag combination carried by every down report.
pub const FLAGS_TIP_IN_RANGE: u8 = 0x03;

/// Whether a contact is being put down or lifted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchPhase {
    Down,
    Up,
}

/// One digitizer contact report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchReport {
    /// Number of contacts currently down at emission time.
    pub contact_count: u8,
    /// Contact identifier (matches the channel id).
    pub contact_id: u8,
    /// Bit 0 = tip switch, bit 1 = in range.
    pub flags: u8,
    /// Contact pressure (0 when lifted).
    pub pressure: u8,
    /// X position in logical grid units.
    pub x: u16,
    /// Y position in logical grid units.
    pub y: u16,
}

impl TouchReport {
    /// Build the report for one channel.
    ///
    /// Down reports carry the channel's fixed virtual touch point; up
    /// reports zero out position, pressure, and flags.  Both carry the live
    /// contact count.
    pub fn build(phase: TouchPhase, channel_id: u8, contact_count: u8) -> Self {
        match phase {
            TouchPhase::Down => {
                let (x, y) = TOUCH_POINTS[usize::from(channel_id) - 1];
                Self {
                    contact_count,
                    contact_id: channel_id,
                    flags: FLAGS_TIP_IN_RANGE,
                    pressure: TOUCH_PRESSURE,
                    x,
                    y,
                }
            }
            TouchPhase::Up => Self {
                contact_count,
                contact_id: channel_id,
                flags: 0,
                pressure: 0,
                x: 0,
                y: 0,
            },
        }
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (always 8), or 0 if the buffer
    /// is too small.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < TOUCH_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.contact_count;
        buf[1] = self.contact_id;
        buf[2] = self.flags;
        buf[3] = self.pressure;
        buf[4..6].copy_from_slice(&self.x.to_le_bytes());
        buf[6..8].copy_from_slice(&self.y.to_le_bytes());
        TOUCH_REPORT_SIZE
    }

    /// Returns `true` for a touch-down report (tip switch set).
    pub fn is_down(&self) -> bool {
        self.flags & 0x01 != 0
    }
}

// USB HID report descriptor for the digitizer

/// USB HID Report Descriptor for a single-finger-per-report touch screen
/// on a 0..10000 logical grid.  Matches the 8-byte layout above.
pub const TOUCH_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x0D, // Usage Page (Digitizers)
    0x09, 0x04, // Usage (Touch Screen)
    0xA1, 0x01, // Collection (Application)
    //
    //   - Contact count -
    0x09, 0x54, //   Usage (Contact Count)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x03, //   Logical Maximum (3)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    0x09, 0x22, //   Usage (Finger)
    0xA1, 0x02, //   Collection (Logical)
    //
    //     - Contact identifier -
    0x09, 0x51, //     Usage (Contact Identifier)
    0x25, 0x03, //     Logical Maximum (3)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    //
    //     - Tip switch + in range (2 bits + 6 padding) -
    0x09, 0x42, //     Usage (Tip Switch)
    0x09, 0x32, //     Usage (In Range)
    0x25, 0x01, //     Logical Maximum (1)
    0x75, 0x01, //     Report Size (1)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x95, 0x06, //     Report Count (6)
    0x81, 0x01, //     Input (Constant) - padding
    //
    //     - Pressure -
    0x09, 0x30, //     Usage (Tip Pressure)
    0x26, TOUCH_PRESSURE, 0x00, // Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    //
    //     - X, Y position -
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x26, // Logical Maximum (TOUCH_GRID_MAX)
    TOUCH_GRID_MAX.to_le_bytes()[0],
    TOUCH_GRID_MAX.to_le_bytes()[1],
    0x75, 0x10, //     Report Size (16)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    //
    0xC0, //   End Collection (Logical)
    0xC0, // End Collection (Application)
];
