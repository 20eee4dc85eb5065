use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CamoError::invalid_parameter("x")
            .to_string()
            .contains("invalid parameter:")
    );
    assert!(CamoError::empty_mask("x").to_string().contains("empty mask:"));
    assert!(
        CamoError::invalid_range("x")
            .to_string()
            .contains("invalid range:")
    );
    assert!(CamoError::encode("x").to_string().contains("encode error:"));
    assert!(
        CamoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CamoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn kinds_are_distinguishable_by_match() {
    let errs = [
        CamoError::invalid_parameter("a"),
        CamoError::empty_mask("b"),
        CamoError::invalid_range("c"),
    ];
    let kinds: Vec<&str> = errs
        .iter()
        .map(|e| match e {
            CamoError::InvalidParameter(_) => "param",
            CamoError::EmptyMask(_) => "empty",
            CamoError::InvalidRange(_) => "range",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, ["param", "empty", "range"]);
}
