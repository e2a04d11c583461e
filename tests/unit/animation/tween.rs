use super::*;
use std::sync::{Arc, Mutex};

#[test]
fn lerp_interpolates_scalars_and_pairs() {
    assert_eq!(f64::lerp(&0.0, &10.0, 0.5), 5.0);
    assert_eq!(f32::lerp(&2.0, &4.0, 0.25), 2.5);
    assert_eq!(<(f64, f64)>::lerp(&(0.0, 10.0), &(10.0, 0.0), 0.1), (1.0, 9.0));
}

#[test]
fn linear_carries_single_sample_averages() {
    let a = linear(0.0, 200.0, 1.0).unwrap();
    assert_eq!(a.duration(), 1.0);
    let v = a.value(0.5).unwrap();
    assert_eq!(v.count(), 1);
    assert_eq!(v.avg(), Some(100.0));
}

#[test]
fn tween_validates_duration() {
    assert!(tween(0.0, 1.0, 0.0).is_err());
    assert!(linear(0.0, 1.0, -2.0).is_err());
}

#[test]
fn bind_writes_the_blended_average() {
    let slot = Arc::new(Mutex::new(f64::NAN));
    let target = Arc::clone(&slot);
    let blended = linear(0.0, 100.0, 1.0)
        .unwrap()
        .parallel(&linear(100.0, 100.0, 1.0).unwrap())
        .bind(move |v| *target.lock().unwrap() = v);

    blended.value(0.0).unwrap();
    assert_eq!(*slot.lock().unwrap(), 50.0);
    blended.value(1.0).unwrap();
    assert_eq!(*slot.lock().unwrap(), 100.0);
}
