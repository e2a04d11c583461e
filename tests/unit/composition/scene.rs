use super::*;
use crate::{algebra::average::Average, animation::anim::constant};

fn fragment(name: &str, duration: f64) -> FreeSemiring<SceneFragment> {
    FreeSemiring::single(SceneFragment::new(name, constant((), duration).unwrap()))
}

fn interval(name: &str, start: f64, end: f64) -> FragmentInterval {
    FragmentInterval {
        name: name.to_owned(),
        start,
        end,
    }
}

fn demo() -> Scene {
    Scene::new(FreeSemiring::times(
        FreeSemiring::plus(fragment("leaf1", 2.0), fragment("leaf2", 3.0)),
        fragment("leaf3", 1.0),
    ))
}

#[test]
fn parallel_then_sequence_layout() {
    let scene = demo();
    assert_eq!(
        scene.intervals(),
        vec![
            interval("leaf1", 0.0, 2.0),
            interval("leaf2", 0.0, 3.0),
            interval("leaf3", 3.0, 4.0),
        ]
    );
    assert_eq!(scene.total_duration(), 4.0);
    assert_eq!(scene.animation().duration(), 4.0);
}

#[test]
fn identities_take_no_time() {
    let scene = Scene::new(FreeSemiring::times(
        FreeSemiring::times(FreeSemiring::one(), fragment("a", 1.0)),
        FreeSemiring::plus(FreeSemiring::zero(), fragment("b", 2.0)),
    ));
    assert_eq!(
        scene.intervals(),
        vec![interval("a", 0.0, 1.0), interval("b", 1.0, 3.0)]
    );
}

#[test]
fn annihilated_sequences_report_no_intervals() {
    let scene = Scene::new(FreeSemiring::times(fragment("x", 2.0), FreeSemiring::zero()));
    assert!(scene.animation().is_cancelled());
    assert!(scene.intervals().is_empty());
    assert_eq!(scene.total_duration(), scene.animation().duration());

    let cancelled = FreeSemiring::single(SceneFragment::new("gone", Animation::Cancelled));
    let scene = Scene::new(FreeSemiring::plus(
        fragment("kept", 1.5),
        FreeSemiring::times(fragment("dropped", 4.0), cancelled),
    ));
    assert_eq!(scene.intervals(), vec![interval("kept", 0.0, 1.5)]);
    assert_eq!(scene.total_duration(), 1.5);
    assert_eq!(scene.animation().duration(), 1.5);
}

#[test]
fn empty_scene() {
    let scene = Scene::new(FreeSemiring::one());
    assert!(scene.intervals().is_empty());
    assert_eq!(scene.total_duration(), 0.0);
    assert!(scene.animation().is_trivial());
    assert!(scene.timeline_tracks().unwrap().is_empty());
}

#[test]
fn sequence_after_uneven_parallel_starts_at_latest_end() {
    let scene = Scene::new(FreeSemiring::times(
        FreeSemiring::plus(fragment("long", 5.0), fragment("short", 1.0)),
        fragment("next", 1.0),
    ));
    assert_eq!(scene.intervals()[2], interval("next", 5.0, 6.0));
}

#[test]
fn timeline_tracks_fill_their_interval() {
    let tracks = demo().timeline_tracks().unwrap();
    assert_eq!(tracks.len(), 3);
    for track in &tracks {
        assert_eq!(track.fill.duration(), track.interval.end);
    }

    let last = &tracks[2];
    assert_eq!(last.interval, interval("leaf3", 3.0, 4.0));
    assert_eq!(last.fill.duration(), 4.0);
    assert_eq!(last.fill.value(0.0).unwrap().avg(), Some(0.0));
    assert!((last.fill.value(0.875).unwrap().avg().unwrap() - 0.5).abs() < 1e-9);
    assert_eq!(last.fill.value(1.0).unwrap().avg(), Some(1.0));

    let first = &tracks[0];
    assert_eq!(first.fill.duration(), 2.0);
    assert_eq!(first.fill.value(0.5).unwrap().avg(), Some(0.5));
}

#[test]
fn intervals_serialize_as_plain_records() {
    let json = serde_json::to_string(&interval("x", 0.0, 1.5)).unwrap();
    assert_eq!(json, r#"{"name":"x","start":0.0,"end":1.5}"#);
}
