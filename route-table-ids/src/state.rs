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

//! Host-visible state of one `route_table_ids` read.

use crate::criteria::{CustomFilter, LookupCriteria};
use crate::describer::RouteTableDescriber;
use crate::lookup::{LookupError, LookupResult, RouteTableLookup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Fields the host persists after a successful read.
///
/// Input fields are echoed back untouched; `ids` holds the matched route table
/// identifiers and `id` the synthetic identity of this read.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct RouteTableIdsState {
    pub id: String,
    pub route_table_id: Option<String>,
    pub subnet_id: Option<String>,
    pub vpc_id: Option<String>,
    pub filter: Vec<CustomFilter>,
    pub tags: BTreeMap<String, String>,
    pub ids: Vec<String>,
}

impl RouteTableIdsState {
    pub fn from_lookup(criteria: LookupCriteria, result: LookupResult) -> Self {
        let (id, ids) = result.into_parts();
        Self {
            id,
            route_table_id: criteria.route_table_id,
            subnet_id: criteria.subnet_id,
            vpc_id: criteria.vpc_id,
            filter: criteria.filter.unwrap_or_default(),
            tags: criteria.tags.unwrap_or_default(),
            ids,
        }
    }
}

/// Runs one full read: compose, describe, validate, extract and echo.
pub async fn read_route_table_ids(
    describer: Arc<dyn RouteTableDescriber>,
    criteria: LookupCriteria,
) -> Result<RouteTableIdsState, LookupError> {
    let result = RouteTableLookup::new(describer).lookup(&criteria).await?;
    Ok(RouteTableIdsState::from_lookup(criteria, result))
}
