use crate::models::{StageEvent, StageInterval, StageLookup};
use std::cmp::Ordering;

/// Build the ordered, contiguous stage intervals of one card.
///
/// One interval per event. Dated events come first, by instant; events
/// sharing an instant keep their input order (`sort_by` is stable). Events
/// with an unparsable date follow, ordered by their raw date string. The
/// last interval stays open.
pub fn build_intervals(events: &[StageEvent], lookup: &StageLookup) -> Vec<StageInterval> {
    if events.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&StageEvent> = events.iter().collect();
    sorted.sort_by(|a, b| match (a.at, b.at) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.date.cmp(&b.date),
    });

    sorted
        .iter()
        .enumerate()
        .map(|(i, ev)| StageInterval {
            stage_id: ev.stage_id.clone(),
            stage_name: lookup.name_of(Some(&ev.stage_id)),
            entry_time: Some(ev.date.clone()),
            exit_time: sorted.get(i + 1).map(|next| next.date.clone()),
        })
        .collect()
}
