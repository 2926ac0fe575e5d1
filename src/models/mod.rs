pub mod action;
pub mod card;
pub mod stage;

pub use action::{ActionData, ListRef, RawAction};
pub use card::{BoardList, Card, StageLookup, UNKNOWN_STAGE};
pub use stage::{StageEvent, StageEventKind, StageInterval};
