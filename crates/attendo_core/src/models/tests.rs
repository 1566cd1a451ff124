use super::account::{normalize_email, validate_email};
use super::user::{format_last_edited, UserFieldUpdate, UserRecord};
use crate::constants::JUST_CREATED;
use chrono::{FixedOffset, TimeZone, Utc};

#[test]
fn just_created_record_has_empty_skill_and_sentinel() {
    let record = UserRecord::just_created("Alice", "a@x.com");
    assert_eq!(record.username, "Alice");
    assert_eq!(record.email, "a@x.com");
    assert_eq!(record.skill, "");
    assert_eq!(record.last_edited, JUST_CREATED);
}

#[test]
fn last_edited_uses_the_instants_own_offset() {
    let utc = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
    assert_eq!(format_last_edited(&utc), "2024-03-09 07:05:03");

    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    assert_eq!(
        format_last_edited(&utc.with_timezone(&plus_two)),
        "2024-03-09 09:05:03"
    );
}

#[test]
fn profile_save_trims_text_and_keeps_empty_fields() {
    let at = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
    let update = UserFieldUpdate::profile_save("  Bob ", "", " \t", &at);
    assert_eq!(update.username.as_deref(), Some("Bob"));
    assert_eq!(update.email.as_deref(), Some(""));
    assert_eq!(update.skill.as_deref(), Some(""));
    assert_eq!(update.last_edited.as_deref(), Some("2025-12-31 23:59:59"));
    assert!(!update.is_empty());
}

#[test]
fn apply_to_only_touches_present_fields() {
    let mut record = UserRecord::just_created("Alice", "a@x.com");
    let update = UserFieldUpdate {
        skill: Some("welding".to_string()),
        ..UserFieldUpdate::default()
    };
    update.apply_to(&mut record);
    assert_eq!(record.username, "Alice");
    assert_eq!(record.email, "a@x.com");
    assert_eq!(record.skill, "welding");
    assert_eq!(record.last_edited, JUST_CREATED);
    assert!(UserFieldUpdate::default().is_empty());
}

#[test]
fn email_validation_and_normalization() {
    assert!(validate_email("a@x.com").is_ok());
    assert!(validate_email("  first.last@example.org ").is_ok());
    for bad in ["", "plain", "@x.com", "a@", "a@@x.com", "a b@x.com"] {
        assert!(validate_email(bad).is_err(), "accepted {:?}", bad);
    }
    assert_eq!(normalize_email("  Alice@X.COM "), "alice@x.com");
}
