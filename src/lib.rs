//! Test-only library interface for tritouch.
//!
//! This crate root exposes the pure logic modules that can be tested on the
//! host (no embedded hardware required): the input sampling model, the
//! button/encoder trackers, the report builder, the LED feedback mapper,
//! and the control-loop engine.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod engine;
pub mod hid;
pub mod input;
pub mod leds;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
