use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AnimusError::invalid_duration(-1.0)
            .to_string()
            .contains("invalid duration:")
    );
    assert!(
        AnimusError::undefined_sample("x")
            .to_string()
            .contains("undefined sample:")
    );
    assert!(
        AnimusError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AnimusError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
