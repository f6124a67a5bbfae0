use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_value};
use shared_types::{Normalization, SlotList, TimeSlot, FALLBACK_SLOT_COUNT};

#[test]
fn test_fallback_has_22_available_slots() {
    let slots = SlotList::fallback();

    assert_eq!(slots.len(), FALLBACK_SLOT_COUNT);
    assert!(slots.iter().all(|slot| slot.is_available));
}

#[rstest]
#[case(0, "8:00 AM")]
#[case(1, "8:30 AM")]
#[case(8, "12:00 PM")]
#[case(9, "12:30 PM")]
#[case(11, "1:30 PM")]
#[case(21, "6:30 PM")]
fn test_fallback_labels(#[case] index: usize, #[case] label: &str) {
    let slots = SlotList::fallback();

    assert_eq!(slots.as_slice()[index], TimeSlot::new(label, true));
}

#[test]
fn test_fallback_is_deterministic() {
    assert_eq!(SlotList::fallback(), SlotList::fallback());
}

#[rstest]
#[case(Normalization::ForceAvailable, true)]
#[case(Normalization::Preserve, false)]
fn test_normalization_of_booked_slot(#[case] normalization: Normalization, #[case] expected: bool) {
    let slots = SlotList::new(vec![TimeSlot::new("9:00 AM", false)]);

    let normalized = slots.normalized(normalization);

    assert_eq!(normalized.as_slice(), &[TimeSlot::new("9:00 AM", expected)]);
}

#[test]
fn test_normalization_keeps_order_and_labels() {
    let slots = SlotList::new(vec![
        TimeSlot::new("9:00 AM", false),
        TimeSlot::new("9:30 AM", true),
        TimeSlot::new("10:00 AM", false),
    ]);

    let labels: Vec<_> = slots
        .normalized(Normalization::ForceAvailable)
        .into_iter()
        .map(|slot| slot.time_label)
        .collect();

    assert_eq!(labels, vec!["9:00 AM", "9:30 AM", "10:00 AM"]);
}

#[test]
fn test_wire_shape() {
    let body = r#"[{"time_label":"9:00 AM","is_available":false}]"#;

    let slots: SlotList = from_str(body).expect("Failed to deserialize slot list");

    assert_eq!(slots.as_slice(), &[TimeSlot::new("9:00 AM", false)]);
    assert_eq!(
        to_value(&slots).expect("Failed to serialize slot list"),
        json!([{ "time_label": "9:00 AM", "is_available": false }])
    );
}

#[test]
fn test_wire_shape_rejects_missing_flag() {
    let body = r#"[{"time_label":"9:00 AM"}]"#;

    assert!(from_str::<SlotList>(body).is_err());
}

#[test]
fn test_status_class() {
    assert_eq!(TimeSlot::new("8:00 AM", true).status_class(), "available");
    assert_eq!(TimeSlot::new("8:00 AM", false).status_class(), "booked");
}
