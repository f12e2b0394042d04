//! Alternate firmware-update entry path.
//!
//! If key 1 is held at power-on, the firmware lights every pixel, asks the
//! Adafruit nRF52 UF2 bootloader to stay in serial DFU mode, and resets.
//! Neither path returns to the control loop.

use defmt::info;
use smart_leds::{SmartLedsWrite, RGB8};

use crate::config::{BOOTLOADER_DFU_MAGIC, LED_BOOT};
use crate::leds::LedFrame;

/// POWER.GPREGRET - retained register the bootloader inspects after reset.
const GPREGRET: *mut u32 = 0x4000_051C as *mut u32;

/// Light all pixels and hand control to the bootloader.  Never returns.
pub fn enter_bootloader<S>(strip: &mut S) -> !
where
    S: SmartLedsWrite<Color = RGB8>,
{
    info!("bootloader strap active - entering DFU");

    let (r, g, b) = LED_BOOT;
    let mut frame = LedFrame::new();
    frame.fill(RGB8 { r, g, b });
    // Best effort - we are about to reset either way.
    let _ = frame.commit(strip);

    // Safety: GPREGRET is a write-safe retained register; the bootloader
    // reads it on the next boot and clears it.
    unsafe { GPREGRET.write_volatile(u32::from(BOOTLOADER_DFU_MAGIC)) };
    cortex_m::peripheral::SCB::sys_reset();
}
