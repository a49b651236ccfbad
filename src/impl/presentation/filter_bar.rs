use chrono::NaiveDate;

use crate::{
    domain::logic::{
        chip_synthesizer::has_active_filters, filter_predicates::filter_entries,
        filter_reducer::reduce,
    },
    entities::{Chip, FilterAction, FilterState, FundWatch, SizeFilter},
};

use super::table_settings::{Density, TableSettings};

/// A selectable value in a multi-select popover.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct FacetOption {
    pub value: String,
    /// Entries that would match if this value were the only one selected,
    /// given every other active filter.
    pub count: usize,
    pub selected: bool,
    pub toggle: FilterAction,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct SizeOption {
    pub key: String,
    pub label: String,
    pub selected: bool,
    pub select: FilterAction,
}

/// Quarter quick-select in the date-range popover.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct QuarterShortcut {
    pub label: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub selected: bool,
    pub select: FilterAction,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct ColumnToggle {
    pub key: String,
    pub label: String,
    pub visible: bool,
}

/// Everything the filter bar (desktop popovers and mobile sheet alike) needs
/// to render. Controls report changes as [`FilterAction`]s; table preferences
/// go through [`TableSettings`].
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct FilterBarModel {
    pub search: String,
    pub categories: Vec<FacetOption>,
    pub stages: Vec<FacetOption>,
    pub sizes: Vec<SizeOption>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub quarters: Vec<QuarterShortcut>,
    pub columns: Vec<ColumnToggle>,
    pub density: Density,
    pub chips: Vec<Chip>,
    pub has_active_filters: bool,
    pub result_count: usize,
    pub total_count: usize,
}

impl FilterBarModel {
    pub fn build(dataset: &FundWatch, state: &FilterState, settings: &TableSettings) -> Self {
        let lookups = dataset.lookups();
        Self {
            search: state.q.clone(),
            categories: facet_options(
                dataset,
                state,
                "category",
                &state.cat,
                FilterAction::SetCategories(Vec::new()),
                |v| FilterAction::SetCategories(vec![v]),
                FilterAction::ToggleCategory,
            ),
            stages: facet_options(
                dataset,
                state,
                "stage",
                &state.stage,
                FilterAction::SetStages(Vec::new()),
                |v| FilterAction::SetStages(vec![v]),
                FilterAction::ToggleStage,
            ),
            sizes: std::iter::once(SizeOption {
                key: SizeFilter::All.key().to_string(),
                label: "Any amount".to_string(),
                selected: state.size == SizeFilter::All,
                select: FilterAction::SetSize(SizeFilter::All),
            })
            .chain(lookups.amount_buckets.iter().map(|b| {
                let size = SizeFilter::Bucket(b.key.clone());
                SizeOption {
                    key: b.key.clone(),
                    label: b.label.clone(),
                    selected: state.size == size,
                    select: FilterAction::SetSize(size),
                }
            }))
            .collect(),
            from: state.from,
            to: state.to,
            quarters: dataset
                .quarters()
                .iter()
                .map(|q| QuarterShortcut {
                    label: q.label.clone(),
                    from: q.from,
                    to: q.to,
                    selected: state.from == Some(q.from) && state.to == Some(q.to),
                    select: q.select_action(),
                })
                .collect(),
            columns: lookups
                .column_labels
                .columns()
                .map(|c| ColumnToggle {
                    key: c.to_string(),
                    label: lookups.column_labels.display_name(c).to_string(),
                    visible: settings.is_visible(c),
                })
                .collect(),
            density: settings.density,
            chips: dataset.chips(state),
            has_active_filters: has_active_filters(state),
            result_count: dataset.filter(state).len(),
            total_count: dataset.entries().len(),
        }
    }
}

/// Options for one multi-select dimension. Counts are computed with that
/// dimension replaced by the single option, so they stay meaningful while
/// other options are selected. Selected values missing from the data are
/// still listed, so they can be deselected.
fn facet_options(
    dataset: &FundWatch,
    state: &FilterState,
    column: &str,
    selected: &[String],
    clear: FilterAction,
    only: impl Fn(String) -> FilterAction,
    toggle: impl Fn(String) -> FilterAction,
) -> Vec<FacetOption> {
    let buckets = &dataset.lookups().amount_buckets;
    let unconstrained = reduce(state, clear);
    let mut values = dataset.distinct_values(column);
    let missing: Vec<String> = selected
        .iter()
        .filter(|s| !values.contains(s))
        .cloned()
        .collect();
    values.extend(missing);
    values
        .into_iter()
        .map(|value| {
            let narrowed = reduce(&unconstrained, only(value.clone()));
            FacetOption {
                count: filter_entries(dataset.entries(), &narrowed, buckets).len(),
                selected: selected.contains(&value),
                toggle: toggle(value.clone()),
                value,
            }
        })
        .collect()
}
