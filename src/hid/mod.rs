//! HID report types for the multi-touch digitizer.

pub mod touch;

pub use touch::{TouchPhase, TouchReport, TOUCH_REPORT_SIZE};
