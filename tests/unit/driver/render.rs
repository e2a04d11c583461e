use super::*;
use crate::{algebra::average::Average, animation::tween::linear, driver::sink::InMemorySink};

fn fps(num: u32) -> Fps {
    Fps::new(num, 1).unwrap()
}

#[test]
fn frame_intervals_floor_with_minimum_of_one() {
    assert_eq!(frame_intervals(1.0, fps(4)), 4);
    assert_eq!(frame_intervals(1.9, fps(4)), 7);
    assert_eq!(frame_intervals(0.1, fps(4)), 1);
}

#[test]
fn sample_evenly_covers_both_endpoints() {
    let a = linear(0.0, 100.0, 3.0).unwrap();
    let got: Vec<_> = sample_evenly(&a, 5)
        .unwrap()
        .into_iter()
        .map(|v| v.avg().unwrap())
        .collect();
    assert_eq!(got, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn sample_evenly_rejects_fewer_than_two_steps() {
    let a = linear(0.0, 1.0, 1.0).unwrap();
    assert!(matches!(sample_evenly(&a, 1), Err(AnimusError::Validation(_))));
}

#[test]
fn render_pushes_every_frame_in_order() {
    let a = linear(0.0, 200.0, 1.0).unwrap().map(|v| v.avg());
    let mut sink = InMemorySink::<Option<f64>>::new();
    let frames = render_to_sink(&a, RenderOpts { fps: fps(4) }, &mut sink).unwrap();

    assert_eq!(frames, 5);
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!(cfg.frames, 5);
    assert_eq!(cfg.duration, 1.0);

    let values: Vec<_> = sink.frames().iter().map(|f| f.value).collect();
    assert_eq!(
        values,
        vec![Some(0.0), Some(50.0), Some(100.0), Some(150.0), Some(200.0)]
    );
    for (k, frame) in sink.frames().iter().enumerate() {
        assert_eq!(frame.index, FrameIndex(k as u64));
    }
    assert_eq!(sink.frames()[4].progress, 1.0);
}

#[test]
fn render_rejects_identity_states() {
    let mut sink = InMemorySink::<f64>::new();
    let opts = RenderOpts::default();
    assert!(render_to_sink(&Animation::<f64>::Trivial, opts, &mut sink).is_err());
    assert!(render_to_sink(&Animation::<f64>::Cancelled, opts, &mut sink).is_err());
    assert!(sink.config().is_none());
}

#[test]
fn render_rejects_overflowed_duration() {
    let huge = linear(0.0, 1.0, 1e308).unwrap();
    let endless = (&huge * &huge).map(|v| v.avg());
    let mut sink = InMemorySink::<Option<f64>>::new();
    assert!(matches!(
        render_to_sink(&endless, RenderOpts::default(), &mut sink),
        Err(AnimusError::InvalidDuration(_))
    ));
    assert!(sink.config().is_none());
}
