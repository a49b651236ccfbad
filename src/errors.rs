use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(
    MissingCsvColumn,
    "Entries CSV is missing required column '{column}'.",
    { column: &str }
);
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(
    InvalidDateRange,
    "Invalid date range: start ({from}) is after end ({to}).",
    { from: &str, to: &str }
);

// Lookup tables.
define_client_error!(
    DuplicateAmountBucket,
    "Amount bucket '{key}' is defined more than once.",
    { key: &str }
);
define_client_error!(
    InvalidAmountBucketRange,
    "Amount bucket '{key}' has min ({min}) not below max ({max}).",
    { key: &str, min: f64, max: f64 }
);
define_client_error!(
    ReservedAmountBucketKey,
    "Amount bucket key '{key}' is reserved.",
    { key: &str }
);

// Export.
define_internal_error!(CsvExportFailed, "Failed to write CSV export: {details}.", { details: &str });
