//! tritouch firmware entry point.
//!
//! Cooperative control loop: once per debounce period, snapshot all input
//! lines, feed them to the engine, and when anything changed send one
//! digitizer report per channel and restage its feedback pixel.  The LED
//! chain is committed every iteration regardless.

#![no_std]
#![no_main]

mod boot;
mod config;
mod engine;
mod error;
mod hid;
mod input;
mod leds;
mod usb;

use defmt::{info, unwrap, warn};
use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pin, Pull};
use embassy_nrf::peripherals::USBD;
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{bind_interrupts, peripherals, spim};
use embassy_time::Timer;
use embassy_usb::UsbDevice;
use ws2812_spi::Ws2812;

use engine::Engine;
use error::Error;
use hid::{TouchReport, TOUCH_REPORT_SIZE};
use input::{InputSample, Line};
use leds::LedFrame;
use usb::hid_device::TouchWriter;

bind_interrupts!(struct LedIrqs {
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
});

/// All input lines, sampled together once per iteration.
struct InputLines {
    key1: Input<'static>,
    key2: Input<'static>,
    key3: Input<'static>,
    encoder_switch: Input<'static>,
    encoder_a: Input<'static>,
    encoder_b: Input<'static>,
}

impl InputLines {
    fn sample(&self) -> InputSample {
        let mut sample = InputSample::idle();
        sample.set_level(Line::Key1, self.key1.is_high());
        sample.set_level(Line::Key2, self.key2.is_high());
        sample.set_level(Line::Key3, self.key3.is_high());
        sample.set_level(Line::EncoderSwitch, self.encoder_switch.is_high());
        sample.set_level(Line::EncoderA, self.encoder_a.is_high());
        sample.set_level(Line::EncoderB, self.encoder_b.is_high());
        sample
    }
}

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, Driver<'static, USBD, HardwareVbusDetect>>) -> ! {
    usb::hid_device::run_usb_device(device).await
}

async fn send_report(writer: &mut TouchWriter, report: &TouchReport) -> Result<(), Error> {
    let mut buf = [0u8; TOUCH_REPORT_SIZE];
    let n = report.serialize(&mut buf);
    writer.write(&buf[..n]).await.map_err(|_| Error::Usb)
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("tritouch starting");

    let lines = InputLines {
        key1: Input::new(p.P0_11.degrade(), Pull::Up),
        key2: Input::new(p.P0_12.degrade(), Pull::Up),
        key3: Input::new(p.P0_24.degrade(), Pull::Up),
        encoder_switch: Input::new(p.P0_25.degrade(), Pull::Up),
        encoder_a: Input::new(p.P0_29.degrade(), Pull::Up),
        encoder_b: Input::new(p.P0_28.degrade(), Pull::Up),
    };
    let mut status_led = Output::new(p.P0_06.degrade(), Level::High, OutputDrive::Standard);

    // WS2812 chain clocked off SPIM3.  M4 is the closest divider to the
    // 3 MHz the one-wire encoding expects.
    let mut spim_config = spim::Config::default();
    spim_config.frequency = spim::Frequency::M4;
    let spi = spim::Spim::new_txonly_nosck(p.SPI3, LedIrqs, p.P0_16, spim_config);
    let mut strip = Ws2812::new(spi);

    // Bootloader strap: key 1 held at power-on diverts to DFU before the
    // USB stack comes up.
    if lines.key1.is_low() {
        boot::enter_bootloader(&mut strip);
    }

    let usb_device = usb::hid_device::init(p.USBD);
    unwrap!(spawner.spawn(usb_task(usb_device.device)));
    let mut writer = usb_device.touch_writer;

    let mut machine = Engine::new();
    let mut frame = LedFrame::new();

    // Start with the chain dark.
    if frame.commit(&mut strip).is_err() {
        warn!("initial LED commit failed: {}", Error::Led);
    }

    loop {
        // Visual heartbeat, one toggle per iteration.
        status_led.toggle();

        Timer::after_millis(config::DEBOUNCE_MS).await;

        let sample = lines.sample();
        if let Some(emission) = machine.step(&sample) {
            for (index, (report, color)) in
                emission.reports.iter().zip(emission.leds).enumerate()
            {
                frame.set(index, color);
                if let Err(e) = send_report(&mut writer, report).await {
                    warn!("touch report dropped: {}", e);
                }
            }
        }

        // Latch the chain every iteration, dirty or not.
        if let Err(_e) = frame.commit(&mut strip) {
            warn!("LED commit failed: {}", Error::Led);
        }
    }
}
