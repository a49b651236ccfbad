use std::collections::HashSet;

use crate::entities::{FilterAction, FilterState};

/// Applies `action` to `state`, returning the new state.
///
/// All normalization happens here: multi-select values are deduplicated
/// (first occurrence wins), and a column filter left with no values is dropped
/// from the state entirely.
pub fn reduce(state: &FilterState, action: FilterAction) -> FilterState {
    let mut next = state.clone();
    match action {
        FilterAction::SetSearch(q) => next.q = q,
        FilterAction::SetCategories(values) => next.cat = dedup(values),
        FilterAction::ToggleCategory(value) => toggle(&mut next.cat, value),
        FilterAction::RemoveCategory(value) => next.cat.retain(|v| *v != value),
        FilterAction::SetStages(values) => next.stage = dedup(values),
        FilterAction::ToggleStage(value) => toggle(&mut next.stage, value),
        FilterAction::RemoveStage(value) => next.stage.retain(|v| *v != value),
        FilterAction::SetSize(size) => next.size = size,
        FilterAction::SetDateRange { from, to } => {
            next.from = from;
            next.to = to;
        }
        FilterAction::ClearDateRange => {
            next.from = None;
            next.to = None;
        }
        FilterAction::SetColumnFilter { column, values } => {
            let values = dedup(values);
            if values.is_empty() {
                next.cf.shift_remove(&column);
            } else {
                next.cf.insert(column, values);
            }
        }
        FilterAction::RemoveColumnValue { column, value } => {
            if let Some(values) = next.cf.get_mut(&column) {
                values.retain(|v| *v != value);
                if values.is_empty() {
                    next.cf.shift_remove(&column);
                }
            }
        }
        FilterAction::ClearAll => next = FilterState::default(),
    }
    next
}

fn dedup(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

fn toggle(values: &mut Vec<String>, value: String) {
    if values.contains(&value) {
        values.retain(|v| *v != value);
    } else {
        values.push(value);
    }
}
