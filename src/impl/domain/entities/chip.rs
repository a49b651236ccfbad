use crate::{domain::logic::filter_reducer::reduce, entities::FilterAction};

use super::filter_state::FilterState;

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipKind {
    Search,
    Category,
    Stage,
    Size,
    DateRange,
    Column,
}

/// One active constraint, as shown in the filter bar. Regenerated from the
/// filter state on every render; never stored.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct Chip {
    pub label: String,
    pub kind: ChipKind,
    /// Action that removes exactly this constraint.
    pub remove: FilterAction,
}

impl Chip {
    /// State with this chip's constraint removed and everything else intact.
    pub fn remove_from(&self, state: &FilterState) -> FilterState {
        reduce(state, self.remove.clone())
    }
}
