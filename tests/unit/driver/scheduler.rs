use super::*;
use std::sync::{Arc, Mutex};

fn recorder(duration: f64) -> (Animation<()>, Arc<Mutex<Vec<f64>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let anim = Animation::runnable(duration, move |t| sink.lock().unwrap().push(t)).unwrap();
    (anim, seen)
}

#[test]
fn zero_duration_appends_are_ignored() {
    let mut scheduler = Scheduler::default();
    scheduler.append(Animation::Trivial).unwrap();
    scheduler.append(Animation::Cancelled).unwrap();
    let report = scheduler.tick(0.0);
    assert_eq!(report.started, 0);
    assert_eq!(scheduler.active_len(), 0);
}

#[test]
fn samples_elapsed_fraction_then_retires_at_one() {
    let (anim, seen) = recorder(2.0);
    let mut scheduler = Scheduler::default();
    scheduler.append(anim).unwrap();

    let first = scheduler.tick(10.0);
    assert_eq!(first.started, 1);
    assert_eq!(first.sampled, 1);
    scheduler.tick(11.0);
    scheduler.tick(11.5);
    assert_eq!(scheduler.active_len(), 1);

    let last = scheduler.tick(13.0);
    assert_eq!(last.finished, 1);
    assert_eq!(scheduler.active_len(), 0);
    assert_eq!(*seen.lock().unwrap(), vec![0.0, 0.5, 0.75, 1.0]);

    let idle = scheduler.tick(14.0);
    assert_eq!(idle, TickReport::default());
}

#[test]
fn tick_cap_halts_sampling() {
    let (anim, seen) = recorder(100.0);
    let mut scheduler = Scheduler::new(SchedulerOpts { max_ticks: Some(2) });
    scheduler.append(anim).unwrap();
    scheduler.tick(0.0);
    scheduler.tick(1.0);
    assert!(!scheduler.is_halted());

    let report = scheduler.tick(2.0);
    assert!(report.halted);
    assert!(scheduler.is_halted());
    assert_eq!(scheduler.ticks(), 3);
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn handle_appends_from_another_thread() {
    let (anim, seen) = recorder(1.0);
    let mut scheduler = Scheduler::default();
    let handle = scheduler.handle();
    std::thread::spawn(move || handle.append(anim))
        .join()
        .unwrap()
        .unwrap();

    assert_eq!(scheduler.tick(0.0).started, 1);
    assert_eq!(*seen.lock().unwrap(), vec![0.0]);
}

#[test]
fn handle_reports_dropped_scheduler() {
    let (anim, _) = recorder(1.0);
    let handle = Scheduler::default().handle();
    assert!(matches!(handle.append(anim), Err(AnimusError::Other(_))));
}

#[test]
fn overflowed_durations_are_rejected() {
    let (huge, seen) = recorder(1e308);
    let endless = &huge * &huge;
    let mut scheduler = Scheduler::default();

    assert!(matches!(
        scheduler.append(endless.clone()),
        Err(AnimusError::InvalidDuration(_))
    ));
    assert!(matches!(
        scheduler.handle().append(endless),
        Err(AnimusError::InvalidDuration(_))
    ));
    assert_eq!(scheduler.tick(0.0).started, 0);
    assert_eq!(scheduler.active_len(), 0);
    assert!(seen.lock().unwrap().is_empty());
}
