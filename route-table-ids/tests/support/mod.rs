use route_table_ids::{
    LookupCriteria, LookupError, LookupResult, RouteTableDescriber, RouteTableLookup,
};
use std::collections::BTreeMap;
use std::sync::Arc;

#[allow(dead_code)]
pub(crate) const INVENTORY: &str = "../utils/route-table-static-file/static-configs/testdata.json";

#[allow(dead_code)]
pub(crate) async fn run_lookup(
    describer: Arc<dyn RouteTableDescriber>,
    criteria: &LookupCriteria,
) -> Result<LookupResult, LookupError> {
    RouteTableLookup::new(describer).lookup(criteria).await
}

#[allow(dead_code)]
pub(crate) fn tags(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
    )
}
