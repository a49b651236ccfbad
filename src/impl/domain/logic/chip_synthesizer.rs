use crate::entities::{
    AmountBuckets, Chip, ChipKind, ColumnLabels, FilterAction, FilterState, SizeFilter,
};

use super::utils::ISO_DATE_FORMAT;

/// One chip per active atomic constraint: search, then categories, stages,
/// size, date range and column filters (grouped by column, in state order).
pub fn active_chips(
    state: &FilterState,
    buckets: &AmountBuckets,
    labels: &ColumnLabels,
) -> Vec<Chip> {
    let mut chips = Vec::new();

    if let Some(q) = state.search_query() {
        chips.push(Chip {
            label: format!("Search: \"{}\"", q),
            kind: ChipKind::Search,
            remove: FilterAction::SetSearch(String::new()),
        });
    }

    chips.extend(state.cat.iter().map(|c| Chip {
        label: c.clone(),
        kind: ChipKind::Category,
        remove: FilterAction::RemoveCategory(c.clone()),
    }));

    chips.extend(state.stage.iter().map(|s| Chip {
        label: s.clone(),
        kind: ChipKind::Stage,
        remove: FilterAction::RemoveStage(s.clone()),
    }));

    if let SizeFilter::Bucket(key) = &state.size {
        chips.push(Chip {
            label: buckets.label_for(key).to_string(),
            kind: ChipKind::Size,
            remove: FilterAction::SetSize(SizeFilter::All),
        });
    }

    let fmt = |d: chrono::NaiveDate| d.format(ISO_DATE_FORMAT).to_string();
    let date_label = match (state.from, state.to) {
        (Some(from), Some(to)) => Some(format!("{} – {}", fmt(from), fmt(to))),
        (Some(from), None) => Some(fmt(from)),
        (None, Some(to)) => Some(fmt(to)),
        (None, None) => None,
    };
    if let Some(label) = date_label {
        chips.push(Chip {
            label,
            kind: ChipKind::DateRange,
            remove: FilterAction::ClearDateRange,
        });
    }

    for (column, values) in state.active_column_filters() {
        let display = labels.display_name(column);
        chips.extend(values.iter().map(|value| Chip {
            label: format!("{}: {}", display, value),
            kind: ChipKind::Column,
            remove: FilterAction::RemoveColumnValue {
                column: column.clone(),
                value: value.clone(),
            },
        }));
    }

    chips
}

/// Whether any constraint is active (drives the "Clear all" affordance).
pub fn has_active_filters(state: &FilterState) -> bool {
    state.search_query().is_some()
        || !state.cat.is_empty()
        || !state.stage.is_empty()
        || state.size != SizeFilter::All
        || state.has_date_bound()
        || state.active_column_filters().next().is_some()
}
