use super::*;

const ALL: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InPow(2),
    Ease::OutPow(3),
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutQuad.apply(-1.0), 0.0);
    assert_eq!(Ease::OutQuad.apply(2.0), 1.0);
}

#[test]
fn pow_curves_match_their_fixed_counterparts() {
    for t in [0.1, 0.4, 0.9] {
        assert!((Ease::InPow(2).apply(t) - Ease::InQuad.apply(t)).abs() < 1e-12);
        assert!((Ease::OutPow(3).apply(t) - Ease::OutCubic.apply(t)).abs() < 1e-12);
    }
    assert!((Ease::OutPow(0).apply(0.3) - Ease::Linear.apply(0.3)).abs() < 1e-12);
}

#[test]
fn in_out_curves_are_point_symmetric() {
    for ease in [Ease::InOutQuad, Ease::InOutCubic] {
        for t in [0.1, 0.3, 0.45] {
            assert!((ease.apply(t) + ease.apply(1.0 - t) - 1.0).abs() < 1e-12);
        }
        assert_eq!(ease.apply(0.5), 0.5);
    }
}
