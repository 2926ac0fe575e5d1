use crate::models::{RawAction, StageEvent, StageEventKind};
use crate::utils::date::parse_board_timestamp;
use tracing::debug;

/// Turn a card's raw action log into stage events.
///
/// Only card creations and list changes are kept. Records without a date or
/// stage id are dropped; a date that does not parse is kept raw with
/// `at: None`. Input order is preserved.
pub fn extract_events(actions: &[RawAction]) -> Vec<StageEvent> {
    actions.iter().filter_map(to_stage_event).collect()
}

fn to_stage_event(action: &RawAction) -> Option<StageEvent> {
    let (kind, target) = match action.kind.as_str() {
        RawAction::CREATE_CARD => (StageEventKind::Creation, action.data.list.as_ref()?),
        RawAction::UPDATE_CARD => (StageEventKind::Move, action.data.list_after.as_ref()?),
        _ => return None,
    };

    if target.id.is_empty() {
        return None;
    }

    let date = action.date.as_deref().filter(|d| !d.trim().is_empty())?;
    let at = parse_board_timestamp(date);
    if at.is_none() {
        debug!(date, stage = %target.id, "stage event with unparsable date kept");
    }

    Some(StageEvent {
        date: date.to_string(),
        at,
        stage_id: target.id.clone(),
        kind,
    })
}
