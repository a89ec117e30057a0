/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

use crate::criteria::LookupCriteria;
use crate::describer::RouteTableDescriber;
use crate::filters::{compose_filters, AttributeFilter};
use crate::lookup::{LookupError, LookupResult};
use crate::observability::{events, fields};
use std::sync::Arc;
use tracing::{debug, info, warn};

const COMPONENT: &str = "route_table_lookup";

///
/// [`RouteTableLookup`] runs the lookup pipeline against a [`RouteTableDescriber`].
///
/// It keeps no state between invocations, so one instance may be shared by
/// concurrent callers. Each invocation performs exactly one remote call.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use route_table_ids::{
///     AttributeFilter, LookupCriteria, RemoteError, RemoteRouteTable, RouteTableDescriber,
///     RouteTableLookup,
/// };
///
/// struct TwoTables;
///
/// #[async_trait]
/// impl RouteTableDescriber for TwoTables {
///     async fn describe_route_tables(
///         &self,
///         _filters: &[AttributeFilter],
///     ) -> Result<Vec<RemoteRouteTable>, RemoteError> {
///         Ok(vec![RemoteRouteTable::new("rtb-1"), RemoteRouteTable::new("rtb-2")])
///     }
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let lookup = RouteTableLookup::new(Arc::new(TwoTables));
/// let criteria = LookupCriteria {
///     vpc_id: Some("vpc-1".to_string()),
///     ..Default::default()
/// };
///
/// let result = lookup.lookup(&criteria).await.unwrap();
/// assert_eq!(result.ids(), ["rtb-1", "rtb-2"]);
/// # });
/// ```
#[derive(Clone)]
pub struct RouteTableLookup {
    describer: Arc<dyn RouteTableDescriber>,
}

impl RouteTableLookup {
    pub fn new(describer: Arc<dyn RouteTableDescriber>) -> Self {
        Self { describer }
    }

    /// Composes filters from `criteria` and executes the lookup.
    pub async fn lookup(&self, criteria: &LookupCriteria) -> Result<LookupResult, LookupError> {
        let filters = compose_filters(criteria);
        debug!(
            event = events::LOOKUP_FILTERS_COMPOSED,
            component = COMPONENT,
            filter_count = filters.len(),
            "composed lookup filters"
        );

        self.execute(&filters).await
    }

    /// Issues one describe call with `filters` and validates the response.
    pub async fn execute(&self, filters: &[AttributeFilter]) -> Result<LookupResult, LookupError> {
        debug!(
            event = events::LOOKUP_START,
            component = COMPONENT,
            filter_count = filters.len(),
            filters = fields::format_filters(filters).as_str(),
            "describe route tables"
        );

        let route_tables = match self.describer.describe_route_tables(filters).await {
            Ok(route_tables) => route_tables,
            Err(err) => {
                warn!(
                    event = events::LOOKUP_REMOTE_FAILED,
                    component = COMPONENT,
                    err = %err,
                    "describe route tables failed"
                );
                return Err(err.into());
            }
        };

        if route_tables.is_empty() {
            warn!(
                event = events::LOOKUP_EMPTY_RESULT,
                component = COMPONENT,
                filters = fields::format_filters(filters).as_str(),
                "no route tables matched"
            );
            return Err(LookupError::EmptyResult);
        }

        let ids: Vec<String> = route_tables
            .into_iter()
            .map(|route_table| route_table.route_table_id)
            .collect();
        let result = LookupResult::new(ids);

        info!(
            event = events::LOOKUP_OK,
            component = COMPONENT,
            match_count = result.ids().len(),
            result_id = result.id(),
            "route table lookup succeeded"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::RouteTableLookup;
    use crate::criteria::LookupCriteria;
    use crate::describer::{RemoteError, RemoteErrorCode, RemoteRouteTable, RouteTableDescriber};
    use crate::filters::AttributeFilter;
    use crate::lookup::LookupError;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    struct CannedDescriber {
        response: Result<Vec<RemoteRouteTable>, RemoteError>,
        calls: Mutex<Vec<Vec<AttributeFilter>>>,
    }

    impl CannedDescriber {
        fn returning(ids: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(ids.iter().map(|id| RemoteRouteTable::new(id)).collect()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(error: RemoteError) -> Arc<Self> {
            Arc::new(Self {
                response: Err(error),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<Vec<AttributeFilter>> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    #[async_trait]
    impl RouteTableDescriber for CannedDescriber {
        async fn describe_route_tables(
            &self,
            filters: &[AttributeFilter],
        ) -> Result<Vec<RemoteRouteTable>, RemoteError> {
            self.calls
                .lock()
                .expect("calls lock")
                .push(filters.to_vec());
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn returns_identifiers_in_remote_order() {
        let describer = CannedDescriber::returning(&["rtb-2", "rtb-1", "rtb-3"]);
        let lookup = RouteTableLookup::new(describer.clone());

        let result = lookup
            .lookup(&LookupCriteria {
                vpc_id: Some("vpc-1".to_string()),
                ..Default::default()
            })
            .await
            .expect("lookup should succeed");

        assert_eq!(result.ids(), ["rtb-2", "rtb-1", "rtb-3"]);
        assert_eq!(
            describer.calls(),
            vec![vec![AttributeFilter::exact("vpc-id", "vpc-1")]]
        );
    }

    #[tokio::test]
    async fn empty_response_is_an_error() {
        let describer = CannedDescriber::returning(&[]);
        let lookup = RouteTableLookup::new(describer.clone());

        let result = lookup.lookup(&LookupCriteria::default()).await;

        assert_eq!(result, Err(LookupError::EmptyResult));
        assert_eq!(describer.calls(), vec![Vec::<AttributeFilter>::new()]);
    }

    #[tokio::test]
    async fn remote_failure_is_propagated_unchanged() {
        let remote = RemoteError::fail_with_code(RemoteErrorCode::Network, "connection reset");
        let describer = CannedDescriber::failing(remote.clone());
        let lookup = RouteTableLookup::new(describer.clone());

        let result = lookup
            .lookup(&LookupCriteria {
                tags: Some(BTreeMap::from([("Name".to_string(), "prod".to_string())])),
                ..Default::default()
            })
            .await;

        assert_eq!(result, Err(LookupError::Remote(remote)));
        assert_eq!(
            describer.calls(),
            vec![vec![AttributeFilter::tag("Name", "prod")]]
        );
    }

    #[tokio::test]
    async fn repeated_lookups_get_distinct_identities() {
        let lookup = RouteTableLookup::new(CannedDescriber::returning(&["rtb-1"]));
        let criteria = LookupCriteria::default();

        let first = lookup.lookup(&criteria).await.expect("first lookup");
        let second = lookup.lookup(&criteria).await.expect("second lookup");

        assert_eq!(first.ids(), second.ids());
        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn execute_sends_filters_exactly_once() {
        let describer = CannedDescriber::returning(&["rtb-1"]);
        let lookup = RouteTableLookup::new(describer.clone());
        let filters = vec![
            AttributeFilter::exact("route-table-id", "rtb-1"),
            AttributeFilter::new("association.main", ["true"]),
        ];

        lookup
            .execute(&filters)
            .await
            .expect("lookup should succeed");

        assert_eq!(describer.calls(), vec![filters]);
    }
}
