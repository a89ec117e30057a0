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

//! # route-table-ids
//!
//! `route-table-ids` resolves the set of route table identifiers matching a
//! combination of optional criteria: owning VPC, associated subnet, explicit
//! route table id, resource tags and arbitrary attribute filters.
//!
//! The pipeline is linear: collect criteria, compose filters, execute one remote
//! describe call, validate, extract identifiers and emit a [`LookupResult`].
//! The remote inventory API is reached through a [`RouteTableDescriber`] passed
//! in explicitly, so tests and offline tools substitute their own.
//!
//! ```
//! use std::sync::Arc;
//! use route_table_ids::{read_route_table_ids, LookupCriteria, LookupError, RouteTableDescriber};
//!
//! # mod empty_describer {
//! #     use async_trait::async_trait;
//! #     use route_table_ids::{AttributeFilter, RemoteError, RemoteRouteTable, RouteTableDescriber};
//! #
//! #     pub struct EmptyDescriber;
//! #
//! #     #[async_trait]
//! #     impl RouteTableDescriber for EmptyDescriber {
//! #         async fn describe_route_tables(
//! #             &self,
//! #             _filters: &[AttributeFilter],
//! #         ) -> Result<Vec<RemoteRouteTable>, RemoteError> {
//! #             Ok(Vec::new())
//! #         }
//! #     }
//! # }
//! #
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let describer: Arc<dyn RouteTableDescriber> = Arc::new(empty_describer::EmptyDescriber);
//!
//! // An unmatched query is always reported as an error, never as an empty set.
//! let outcome = read_route_table_ids(describer, LookupCriteria::default()).await;
//! assert_eq!(outcome, Err(LookupError::EmptyResult));
//! # });
//! ```
//!
//! ## Observability model
//!
//! Library code emits `tracing` events using the names in [`observability`] and
//! never installs a global subscriber. Binaries and tests initialize
//! `tracing_subscriber` once at their process boundary.

mod criteria;
pub use criteria::{CustomFilter, LookupCriteria};

mod describer;
pub use describer::{
    RemoteError, RemoteErrorCode, RemoteRouteTable, RouteTableAssociation, RouteTableDescriber,
};

mod filters;
pub use filters::{
    compose_filters, AttributeFilter, ROUTE_TABLE_ID_FIELD, SUBNET_ID_FIELD, TAG_FIELD_PREFIX,
    VPC_ID_FIELD,
};

mod lookup;
pub use lookup::{LookupError, LookupResult, RouteTableLookup, EMPTY_RESULT_MESSAGE};

#[doc(hidden)]
pub mod observability;

mod state;
pub use state::{read_route_table_ids, RouteTableIdsState};
