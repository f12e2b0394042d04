//! USB device layer - digitizer HID endpoint on the nRF52840 USBD.

pub mod hid_device;
