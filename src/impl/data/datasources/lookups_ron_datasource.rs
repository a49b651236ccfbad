use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::lookups_model::LookupsModel,
    entities::Lookups,
    errors::{InvalidRon, ReadError},
};

#[async_trait]
pub(crate) trait LookupsRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Lookups, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Lookups, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct LookupsRonDatasourceImpl;

impl LookupsRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LookupsRonDatasource for LookupsRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Lookups, ServerError> {
        let model: LookupsModel =
            from_str(s).map_err(|e| InvalidRon::with_debug("Lookups", &e))?;
        model.validate()
    }

    async fn from_file<P>(&self, path: P) -> Result<Lookups, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AmountBuckets, ColumnLabels};

    #[test]
    fn empty_document_uses_defaults() {
        let lookups = LookupsRonDatasourceImpl::new().from_string("()").unwrap();
        assert_eq!(lookups.amount_buckets, AmountBuckets::default());
        assert_eq!(lookups.column_labels, ColumnLabels::default());
    }

    #[test]
    fn custom_buckets_and_labels() {
        let ron = r#"(
            amount_buckets: Some([
                (key: "small", label: "Small", max: Some(10000.0)),
                (key: "large", label: "Large", min: Some(10000.0)),
            ]),
            column_labels: { "firm": "Fund manager", "investors": "Investors" },
        )"#;
        let lookups = LookupsRonDatasourceImpl::new().from_string(ron).unwrap();
        assert_eq!(lookups.amount_buckets.label_for("small"), "Small");
        assert!(lookups.amount_buckets.get("lt1m").is_none());
        assert_eq!(lookups.column_labels.display_name("firm"), "Fund manager");
        assert_eq!(lookups.column_labels.display_name("investors"), "Investors");
        assert_eq!(lookups.column_labels.display_name("city"), "City");
    }

    #[test]
    fn rejects_invalid_tables() {
        let ds = LookupsRonDatasourceImpl::new();
        assert!(ds.from_string("(amount_buckets: Some([(key: \"all\", label: \"All\")]))").is_err());
        assert!(ds
            .from_string(
                "(amount_buckets: Some([(key: \"a\", label: \"A\"), (key: \"a\", label: \"B\")]))"
            )
            .is_err());
        assert!(ds
            .from_string("(amount_buckets: Some([(key: \"a\", label: \"A\", min: Some(5.0), max: Some(1.0))]))")
            .is_err());
        assert!(ds.from_string("not ron").is_err());
    }
}
