use std::io::Write as _;

use chrono::NaiveDate;
use fractic_fund_watch::{
    entities::{ChipKind, FilterAction, FilterState, FundWatch, SizeFilter},
    logic::{derive_quarters, has_active_filters, reduce},
    util::FundWatchUtil,
    view::{FilterBarModel, TableSettings},
};

const ENTRIES_CSV: &str = "\
firm,category,stage,amount,announcement_date,city,country,source_name
Northwind Capital,Seed,Pre-seed,$750K,2024-01-15,Austin,United States,FundWire
Harbor Growth,Series A,Growth,12000000,2024-02-10,Boston,United States,PE Daily
Aurora Climate,Grant,Early,$3M,2024-04-01,Oslo,Norway,Nordic Press
Quiet Partners,Seed,Early,undisclosed,,London,United Kingdom,FundWire
Lumen Bio,Series A,Early,45M,2023-11-30,Basel,Switzerland,PE Daily
";

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn load() -> FundWatch {
    FundWatchUtil::new().from_string(ENTRIES_CSV, None).unwrap()
}

fn firms(fund_watch: &FundWatch, state: &FilterState) -> Vec<String> {
    fund_watch
        .filter(state)
        .into_iter()
        .map(|e| e.firm.clone())
        .collect()
}

#[test]
fn quarters_are_derived_on_load() {
    let fund_watch = load();
    let labels: Vec<&str> = fund_watch
        .quarters()
        .iter()
        .map(|q| q.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Q2 2024", "Q1 2024", "Q4 2023"]);
    assert_eq!(fund_watch.quarters()[1].from, d("2024-01-01"));
    assert_eq!(fund_watch.quarters()[1].to, d("2024-03-31"));
    assert_eq!(derive_quarters(fund_watch.entries()), fund_watch.quarters());
}

#[test]
fn empty_state_returns_everything_in_order() {
    let fund_watch = load();
    assert_eq!(
        firms(&fund_watch, &FilterState::default()),
        vec![
            "Northwind Capital",
            "Harbor Growth",
            "Aurora Climate",
            "Quiet Partners",
            "Lumen Bio",
        ]
    );
}

#[test]
fn actions_narrow_and_chips_undo_them() {
    let fund_watch = load();
    let mut state = FilterState::default();
    for action in [
        FilterAction::SetCategories(vec!["Seed".into(), "Series A".into()]),
        FilterAction::SetSize(SizeFilter::from("lt1m")),
    ] {
        state = reduce(&state, action);
    }
    assert_eq!(firms(&fund_watch, &state), vec!["Northwind Capital"]);

    let chips = fund_watch.chips(&state);
    let size_chip = chips.iter().find(|c| c.kind == ChipKind::Size).unwrap();
    assert_eq!(size_chip.label, "< $1M");

    let state = size_chip.remove_from(&state);
    assert_eq!(
        firms(&fund_watch, &state),
        vec![
            "Northwind Capital",
            "Harbor Growth",
            "Quiet Partners",
            "Lumen Bio"
        ]
    );

    let cleared = reduce(&state, FilterAction::ClearAll);
    assert!(!has_active_filters(&cleared));
}

#[test]
fn quarter_shortcut_excludes_undated_entries() {
    let fund_watch = load();
    let q1 = fund_watch
        .quarters()
        .iter()
        .find(|q| q.label == "Q1 2024")
        .unwrap();
    let state = reduce(&FilterState::default(), q1.select_action());
    assert_eq!(
        firms(&fund_watch, &state),
        vec!["Northwind Capital", "Harbor Growth"]
    );
}

#[test]
fn search_and_column_filters_combine() {
    let fund_watch = load();
    let state = reduce(
        &reduce(&FilterState::default(), FilterAction::SetSearch("UNITED".into())),
        FilterAction::SetColumnFilter {
            column: "source_name".into(),
            values: vec!["FundWire".into()],
        },
    );
    assert_eq!(
        firms(&fund_watch, &state),
        vec!["Northwind Capital", "Quiet Partners"]
    );
    let labels: Vec<String> = fund_watch
        .chips(&state)
        .into_iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(labels, vec!["Search: \"UNITED\"", "Source: FundWire"]);
}

#[test]
fn amount_column_filter_uses_displayed_values() {
    let fund_watch = load();
    let amounts = fund_watch.distinct_values("amount");
    assert_eq!(amounts.len(), 4);
    assert!(amounts.contains(&"750,000.00 USD".to_string()));

    let state = reduce(
        &FilterState::default(),
        FilterAction::SetColumnFilter {
            column: "amount".into(),
            values: vec!["750,000.00 USD".into()],
        },
    );
    assert_eq!(firms(&fund_watch, &state), vec!["Northwind Capital"]);
    let labels: Vec<String> = fund_watch
        .chips(&state)
        .into_iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(labels, vec!["Amount: 750,000.00 USD"]);
}

#[test]
fn filter_bar_model_reports_counts() {
    let fund_watch = load();
    let state = FilterState {
        cat: vec!["Seed".into()],
        ..Default::default()
    };
    let model = FilterBarModel::build(&fund_watch, &state, &TableSettings::default());
    assert_eq!(model.result_count, 2);
    assert_eq!(model.total_count, 5);
    let series_a = model
        .categories
        .iter()
        .find(|o| o.value == "Series A")
        .unwrap();
    assert_eq!(series_a.count, 2);
    assert!(!series_a.selected);
}

#[test]
fn export_writes_filtered_visible_rows() {
    let util = FundWatchUtil::new();
    let fund_watch = util.from_string(ENTRIES_CSV, None).unwrap();
    let state = FilterState {
        stage: vec!["Early".into()],
        from: Some(d("2024-01-01")),
        ..Default::default()
    };
    let mut settings = TableSettings::default();
    for column in ["category", "stage", "city", "country", "source_name"] {
        settings.toggle_column(column);
    }
    let csv = util.export_csv(&fund_watch, &state, &settings).unwrap();
    assert_eq!(
        csv,
        "Firm,Amount,Announced\nAurora Climate,\"3,000,000.00 USD\",2024-04-01\n"
    );
}

#[test]
fn custom_lookups_relabel_chips() {
    let lookups = r#"(
        amount_buckets: Some([
            (key: "small", label: "Under $5M", max: Some(5000000.0)),
            (key: "large", label: "$5M and up", min: Some(5000000.0)),
        ]),
        column_labels: { "country": "Nation" },
    )"#;
    let fund_watch = FundWatchUtil::new()
        .from_string(ENTRIES_CSV, Some(lookups))
        .unwrap();
    let mut state = reduce(&FilterState::default(), FilterAction::SetSize("large".into()));
    state = reduce(
        &state,
        FilterAction::SetColumnFilter {
            column: "country".into(),
            values: vec!["Switzerland".into()],
        },
    );
    assert_eq!(firms(&fund_watch, &state), vec!["Lumen Bio"]);
    let labels: Vec<String> = fund_watch
        .chips(&state)
        .into_iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(labels, vec!["$5M and up", "Nation: Switzerland"]);
}

#[test]
fn rejects_csv_without_required_columns() {
    assert!(FundWatchUtil::new()
        .from_string("firm,category\nA,B\n", None)
        .is_err());
}

#[tokio::test]
async fn loads_from_files() {
    let mut entries = tempfile::NamedTempFile::new().unwrap();
    entries.write_all(ENTRIES_CSV.as_bytes()).unwrap();
    let mut lookups = tempfile::NamedTempFile::new().unwrap();
    lookups
        .write_all(br#"(column_labels: { "firm": "Manager" })"#)
        .unwrap();

    let fund_watch = FundWatchUtil::new()
        .from_file(entries.path(), Some(lookups.path()))
        .await
        .unwrap();
    assert_eq!(fund_watch.entries().len(), 5);
    assert_eq!(
        fund_watch.lookups().column_labels.display_name("firm"),
        "Manager"
    );
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = FundWatchUtil::new()
        .from_file(dir.path().join("missing.csv"), None)
        .await;
    assert!(result.is_err());
}
