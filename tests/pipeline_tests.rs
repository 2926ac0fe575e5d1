mod common;

use boardreport::core::{DateRange, build_intervals, extract_events, filter_by_date_range};
use boardreport::models::{
    ActionData, ListRef, RawAction, StageEventKind, StageLookup, UNKNOWN_STAGE,
    action::parse_actions_json,
};
use common::{T0, T1, T2, acme_actions, lookup, ts};

#[test]
fn test_extract_keeps_creations_and_moves() {
    let events = extract_events(&acme_actions());

    assert_eq!(events.len(), 3);
    assert_eq!(events[0].stage_id, "lc");
    assert_eq!(events[0].kind, StageEventKind::Move);
    assert_eq!(events[2].stage_id, "la");
    assert_eq!(events[2].kind, StageEventKind::Creation);
    assert_eq!(events[2].at, Some(ts(T0)));
}

#[test]
fn test_extract_drops_unusable_records() {
    let mut no_date = RawAction::moved_to(T1, "lb");
    no_date.date = None;

    let blank_date = RawAction::moved_to("  ", "lb");
    let empty_id = RawAction::moved_to(T1, "");

    let comment = RawAction {
        kind: "commentCard".to_string(),
        date: Some(T1.to_string()),
        data: ActionData::default(),
    };

    // updateCard that renamed the card: no listAfter
    let rename = RawAction {
        kind: RawAction::UPDATE_CARD.to_string(),
        date: Some(T1.to_string()),
        data: ActionData {
            list: Some(ListRef {
                id: "lb".to_string(),
                name: Some("B".to_string()),
            }),
            ..ActionData::default()
        },
    };

    let events = extract_events(&[no_date, blank_date, empty_id, comment, rename]);
    assert!(events.is_empty());
}

#[test]
fn test_extract_keeps_malformed_dates_raw() {
    let events = extract_events(&[RawAction::moved_to("yesterday", "lb")]);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].date, "yesterday");
    assert_eq!(events[0].at, None);
}

#[test]
fn test_malformed_dates_sort_after_dated_events() {
    let actions = vec![
        RawAction::moved_to("zzz", "lc"),
        RawAction::created_in(T1, "la"),
        RawAction::moved_to("not-a-date", "lb"),
        RawAction::moved_to(T2, "lb"),
    ];

    let intervals = build_intervals(&extract_events(&actions), &lookup());
    let entries: Vec<&str> = intervals
        .iter()
        .map(|i| i.entry_time.as_deref().unwrap_or_default())
        .collect();

    assert_eq!(entries, [T1, T2, "not-a-date", "zzz"]);
    assert_eq!(intervals.len(), actions.len());
    for pair in intervals.windows(2) {
        assert_eq!(pair[0].exit_time, pair[1].entry_time);
    }
}

#[test]
fn test_parse_actions_from_api_payload() {
    let json = r#"[
        {"id": "x1", "type": "updateCard", "date": "2024-03-03T09:00:00.000Z",
         "data": {"listBefore": {"id": "la", "name": "A"}, "listAfter": {"id": "lb", "name": "B"},
                  "card": {"id": "c1"}}},
        {"id": "x0", "type": "createCard", "date": "2024-03-01T09:00:00.000Z",
         "data": {"list": {"id": "la", "name": "A"}}}
    ]"#;

    let actions = parse_actions_json(json).expect("valid payload");
    let events = extract_events(&actions);

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].stage_id, "lb");
    assert_eq!(events[1].kind, StageEventKind::Creation);
}

#[test]
fn test_intervals_are_sorted_and_contiguous() {
    let intervals = build_intervals(&extract_events(&acme_actions()), &lookup());

    let names: Vec<&str> = intervals.iter().map(|i| i.stage_name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);

    for pair in intervals.windows(2) {
        assert_eq!(pair[0].exit_time, pair[1].entry_time);
    }

    assert_eq!(intervals[0].entry_time.as_deref(), Some(T0));
    assert!(intervals[2].is_open());
    assert!(intervals.iter().take(2).all(|i| !i.is_open()));
}

#[test]
fn test_intervals_empty_without_events() {
    assert!(build_intervals(&[], &lookup()).is_empty());
}

#[test]
fn test_simultaneous_events_keep_input_order() {
    let actions = vec![
        RawAction::created_in(T0, "la"),
        RawAction::moved_to(T1, "lb"),
        RawAction::moved_to(T1, "lc"),
    ];

    let intervals = build_intervals(&extract_events(&actions), &lookup());
    assert_eq!(intervals[1].stage_id, "lb");
    assert_eq!(intervals[2].stage_id, "lc");
    assert_eq!(intervals[1].entry_time, intervals[1].exit_time);
}

#[test]
fn test_offset_and_zulu_timestamps_sort_together() {
    let actions = vec![
        RawAction::moved_to("2024-03-03T10:00:00+01:00", "lb"),
        RawAction::created_in("2024-03-03T08:30:00Z", "la"),
    ];

    let intervals = build_intervals(&extract_events(&actions), &lookup());
    assert_eq!(intervals[0].stage_name, "A");
    assert_eq!(intervals[1].stage_name, "B");
}

#[test]
fn test_unknown_stage_name() {
    let events = extract_events(&[RawAction::created_in(T0, "archived-list")]);
    let intervals = build_intervals(&events, &StageLookup::default());

    assert_eq!(intervals[0].stage_name, UNKNOWN_STAGE);
    assert_eq!(intervals[0].stage_id, "archived-list");
}

#[test]
fn test_unbounded_filter_is_identity() {
    let intervals = build_intervals(&extract_events(&acme_actions()), &lookup());
    let filtered = filter_by_date_range(intervals.clone(), &DateRange::unbounded());
    assert_eq!(filtered, intervals);
}

#[test]
fn test_filter_on_entry_time_inclusive() {
    let intervals = build_intervals(&extract_events(&acme_actions()), &lookup());

    let range = DateRange::between(Some(ts(T1)), Some(ts(T2)));
    let kept = filter_by_date_range(intervals.clone(), &range);
    let names: Vec<&str> = kept.iter().map(|i| i.stage_name.as_str()).collect();
    assert_eq!(names, ["B", "C"]);

    let only_start = DateRange::between(Some(ts(T2)), None);
    assert_eq!(filter_by_date_range(intervals.clone(), &only_start).len(), 1);

    let only_end = DateRange::between(None, Some(ts(T0)));
    assert_eq!(filter_by_date_range(intervals, &only_end).len(), 1);
}

#[test]
fn test_filter_drops_unparsable_entries_when_bounded() {
    let mut intervals = build_intervals(&extract_events(&acme_actions()), &lookup());
    intervals[0].entry_time = None;
    intervals[1].entry_time = Some("not a date".to_string());

    let kept = filter_by_date_range(intervals, &DateRange::between(Some(ts(T0)), None));
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].stage_name, "C");
}

#[test]
fn test_last_days_window() {
    let range = DateRange::last_days(4, ts(T2)).unwrap();
    assert!(range.contains(ts(T2)));
    assert!(range.contains(ts(T1)));
    assert!(!range.contains(ts(T0)));
}
