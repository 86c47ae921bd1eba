//! Tests for the Car exercise
//!
//! These tests verify:
//! - A new car reports "off" exactly once before starting
//! - Starting writes one confirmation, before the "on" status line
//! - The status can only change through start()

use menagerie::car::{self, Car};
use menagerie::types::EngineStatus;

#[test]
fn test_off_status_before_start() {
    let car = Car::new("Audi");
    let mut out = Vec::new();
    car.display_status(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Engine status: off").count(), 1);
    assert!(!text.contains("on"));
}

#[test]
fn test_confirmation_precedes_on_status() {
    let mut out = Vec::new();
    car::run_demo(&mut out, "Audi").unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.iter().filter(|l| **l == "Engine has started").count(), 1);
    let started = lines.iter().position(|l| *l == "Engine has started").unwrap();
    let on = lines.iter().position(|l| *l == "Engine status: on").unwrap();
    assert!(started < on);
    assert_eq!(lines[0], "Engine status: off");
}

#[test]
fn test_start_is_idempotent() {
    let mut car = Car::new("Audi");
    let mut out = Vec::new();
    for _ in 0..3 {
        car.start(&mut out).unwrap();
    }
    assert_eq!(car.engine_status(), EngineStatus::On);
    assert_eq!(String::from_utf8(out).unwrap(), "Engine has started\n");
}

#[test]
fn test_brand_is_kept() {
    let mut out = Vec::new();
    let car = car::run_demo(&mut out, "Volvo").unwrap();
    assert_eq!(car.brand(), "Volvo");
}

#[test]
fn test_write_failure_propagates() {
    struct Closed;
    impl std::io::Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let car = Car::new("Audi");
    let err = car.display_status(&mut Closed).unwrap_err();
    assert!(matches!(err, menagerie::MenagerieError::Io(_)));
}
