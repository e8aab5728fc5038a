//! TypeScript Generation Tests
//!
//! Validates that record and statistics types can be exported to TypeScript
//! when the tauri feature is enabled.

#[cfg(feature = "tauri")]
#[test]
fn test_owned_types_implement_specta_type() {
    use specta::Type;

    // If this compiles, the owned types are properly configured for TypeScript export.
    fn assert_type<T: Type>() {}

    assert_type::<stintlab::LapRecord>();
    assert_type::<stintlab::StintRecord>();
    assert_type::<stintlab::CompoundStats>();
    assert_type::<stintlab::StintDegradation>();
    assert_type::<stintlab::StintPerformance>();
    assert_type::<stintlab::PitWindow>();
}

#[cfg(not(feature = "tauri"))]
#[test]
fn test_tauri_feature_disabled() {
    // Types still build and serialize without specta::Type
    let stint = stintlab::StintRecord::new("VER", 1, None, 1, 1).unwrap();
    assert_eq!(stint.num_laps, 1);
}
