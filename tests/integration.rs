//! Integration tests for the tritouch input engine.
//!
//! Drives the engine through multi-iteration input scripts and checks the
//! emitted report stream against a reference tally maintained independently
//! of the engine.

use smart_leds::RGB8;
use tritouch::config::{TOUCH_POINTS, TOUCH_PRESSURE};
use tritouch::engine::{Emission, Engine};
use tritouch::hid::TouchReport;
use tritouch::input::{InputSample, Line};

const DIM: RGB8 = RGB8 { r: 15, g: 5, b: 0 };

/// One scripted iteration: the lines held low, and whether the engine is
/// expected to emit.
struct Step {
    low: &'static [Line],
    expect_emission: bool,
}

const fn step(low: &'static [Line], expect_emission: bool) -> Step {
    Step {
        low,
        expect_emission,
    }
}

fn sample_of(low: &[Line]) -> InputSample {
    let mut sample = InputSample::idle();
    for &line in low {
        sample.set_level(line, false);
    }
    sample
}

/// Independent reference for the expected press state of each channel.
fn reference_pressed(sample: &InputSample) -> [bool; 3] {
    [
        sample.is_low(Line::Key1),
        sample.is_low(Line::Key2),
        sample.is_low(Line::Key3) || sample.is_low(Line::EncoderSwitch),
    ]
}

fn check_emission(emission: &Emission, pressed: [bool; 3]) {
    let tally = pressed.iter().filter(|&&p| p).count() as u8;

    for (i, report) in emission.reports.iter().enumerate() {
        assert_eq!(report.contact_id, (i + 1) as u8);
        assert_eq!(
            report.contact_count, tally,
            "count field must equal the live press tally"
        );
        if pressed[i] {
            assert_eq!(report.flags, 0x03);
            assert_eq!(report.pressure, TOUCH_PRESSURE);
            assert_eq!((report.x, report.y), TOUCH_POINTS[i]);
        } else {
            assert_eq!(report.flags, 0);
            assert_eq!(report.pressure, 0);
            assert_eq!((report.x, report.y), (0, 0));
        }
    }
}

#[test]
fn count_field_tracks_reference_tally() {
    let script = [
        step(&[], false),
        step(&[Line::Key1], true),
        step(&[Line::Key1], false),
        step(&[Line::Key1, Line::Key2], true),
        step(&[Line::Key1, Line::Key2, Line::EncoderSwitch], true),
        step(&[Line::Key1, Line::Key2, Line::EncoderSwitch], false),
        step(&[Line::Key2, Line::EncoderSwitch], true),
        step(&[Line::Key2, Line::Key3], false), // channel 3 line swap, no edge
        step(&[Line::Key2], true),
        step(&[], true),
        step(&[], false),
    ];

    let mut machine = Engine::new();
    let mut emitted = 0;

    for (iteration, s) in script.iter().enumerate() {
        let sample = sample_of(s.low);
        let emission = machine.step(&sample);
        assert_eq!(
            emission.is_some(),
            s.expect_emission,
            "iteration {iteration}: emission gate mismatch"
        );
        if let Some(emission) = emission {
            check_emission(&emission, reference_pressed(&sample));
            emitted += 1;
        }
    }

    assert_eq!(emitted, 6);
}

#[test]
fn press_and_rotate_interleaved() {
    let mut machine = Engine::new();
    let mut reports: heapless::Vec<TouchReport, 32> = heapless::Vec::new();

    // Press key 1, rotate clockwise, release, rotate counter-clockwise.
    let script: [&[Line]; 6] = [
        &[Line::Key1],
        &[Line::Key1, Line::EncoderA],
        &[Line::Key1],
        &[],
        &[Line::EncoderA, Line::EncoderB],
        &[],
    ];

    for low in script {
        if let Some(emission) = machine.step(&sample_of(low)) {
            reports.extend(emission.reports);
        }
    }

    // Four dirty iterations: press, detent, release, detent.
    assert_eq!(reports.len(), 12);

    // The clockwise detent re-emitted channel 1's held state with count 1.
    assert_eq!(reports[3].contact_id, 1);
    assert_eq!(reports[3].flags, 0x03);
    assert_eq!(reports[3].contact_count, 1);

    // Rotation alone emits up reports with count 0.
    for report in &reports[9..] {
        assert_eq!(report.flags, 0);
        assert_eq!(report.contact_count, 0);
    }
    assert!(!machine.lamp());
}

#[test]
fn clockwise_rotation_with_no_buttons_dims_all_leds() {
    let mut machine = Engine::new();
    let emission = machine
        .step(&sample_of(&[Line::EncoderA]))
        .expect("detent must emit");

    assert!(machine.lamp());
    for report in &emission.reports {
        assert_eq!(report.flags, 0);
        assert_eq!(report.contact_count, 0);
    }
    assert_eq!(emission.leds, [DIM, DIM, DIM]);
}
