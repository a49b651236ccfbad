// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod entries_csv_datasource;
        pub(crate) mod lookups_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod lookups_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod amount_bucket;
        pub(crate) mod chip;
        pub(crate) mod column_labels;
        pub(crate) mod filter_action;
        pub(crate) mod filter_state;
        pub(crate) mod fund_entry;
        pub(crate) mod fund_watch;
        pub(crate) mod lookups;
        pub(crate) mod quarter_bucket;
    }
    pub(crate) mod logic {
        pub(crate) mod chip_synthesizer;
        pub(crate) mod filter_predicates;
        pub(crate) mod filter_reducer;
        pub(crate) mod quarter_deriver;
        pub(crate) mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod load_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod csv_exporter;
    pub(crate) mod filter_bar;
    pub(crate) mod table_settings;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::amount_bucket::*;
        pub use crate::domain::entities::chip::*;
        pub use crate::domain::entities::column_labels::*;
        pub use crate::domain::entities::filter_action::*;
        pub use crate::domain::entities::filter_state::*;
        pub use crate::domain::entities::fund_entry::*;
        pub use crate::domain::entities::fund_watch::*;
        pub use crate::domain::entities::lookups::*;
        pub use crate::domain::entities::quarter_bucket::*;
    }

    pub mod logic {
        pub use crate::domain::logic::chip_synthesizer::{active_chips, has_active_filters};
        pub use crate::domain::logic::filter_predicates::{entry_matches, filter_entries};
        pub use crate::domain::logic::filter_reducer::reduce;
        pub use crate::domain::logic::quarter_deriver::derive_quarters;
    }

    pub mod view {
        pub use crate::presentation::filter_bar::*;
        pub use crate::presentation::table_settings::*;
    }
}
