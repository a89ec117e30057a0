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

//! A [`RouteTableDescriber`] backed by a static JSON inventory file.
//!
//! The file is re-read on every call and the composed filters are evaluated
//! locally with the remote API's semantics, so lookups can run with no
//! network access.

mod filter_match;

use async_trait::async_trait;
use route_table_ids::observability::events;
use route_table_ids::{
    AttributeFilter, RemoteError, RemoteErrorCode, RemoteRouteTable, RouteTableDescriber,
};
use serde::Deserialize;
use std::fs::{self, canonicalize};
use std::path::PathBuf;
use tracing::{debug, warn};

const COMPONENT: &str = "route_table_static_file";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Inventory {
    route_tables: Vec<RemoteRouteTable>,
}

pub struct RouteTableStaticFile {
    static_file: String,
}

impl RouteTableStaticFile {
    pub fn new(static_file: String) -> Self {
        RouteTableStaticFile { static_file }
    }

    fn load_inventory(&self) -> Result<Vec<RemoteRouteTable>, RemoteError> {
        let inventory_file = PathBuf::from(self.static_file.clone());
        debug!(
            event = events::STATIC_INVENTORY_LOAD_START,
            component = COMPONENT,
            path = %inventory_file.display(),
            "loading route table inventory"
        );

        let inventory_file = canonicalize(inventory_file).map_err(|e| {
            load_failed(
                RemoteErrorCode::InvalidRequest,
                format!("Static inventory file not found: {e:?}"),
            )
        })?;

        let data = fs::read_to_string(&inventory_file).map_err(|e| {
            load_failed(
                RemoteErrorCode::InvalidRequest,
                format!("Unable to read file: {e:?}"),
            )
        })?;

        let inventory: Inventory = serde_json::from_str(&data).map_err(|e| {
            load_failed(
                RemoteErrorCode::Internal,
                format!("Unable to parse JSON: {e:?}"),
            )
        })?;

        debug!(
            event = events::STATIC_INVENTORY_LOAD_OK,
            component = COMPONENT,
            path = %inventory_file.display(),
            route_table_count = inventory.route_tables.len(),
            "loaded route table inventory"
        );

        Ok(inventory.route_tables)
    }
}

fn load_failed(code: RemoteErrorCode, message: String) -> RemoteError {
    warn!(
        event = events::STATIC_INVENTORY_LOAD_FAILED,
        component = COMPONENT,
        err = message.as_str(),
        "unable to load route table inventory"
    );
    RemoteError::fail_with_code(code, message)
}

#[async_trait]
impl RouteTableDescriber for RouteTableStaticFile {
    async fn describe_route_tables(
        &self,
        filters: &[AttributeFilter],
    ) -> Result<Vec<RemoteRouteTable>, RemoteError> {
        // Filter names are checked before the inventory is read, like the remote API does.
        if let Some(rejected) = filters
            .iter()
            .find(|filter| !filter_match::is_supported(filter))
        {
            warn!(
                event = events::STATIC_INVENTORY_FILTER_REJECTED,
                component = COMPONENT,
                filter = rejected.name.as_str(),
                "unsupported filter name"
            );
            return Err(RemoteError::fail_with_code(
                RemoteErrorCode::InvalidRequest,
                format!("The filter '{}' is invalid", rejected.name),
            ));
        }

        let route_tables = self.load_inventory()?;

        Ok(route_tables
            .into_iter()
            .filter(|route_table| filter_match::matches_all(route_table, filters))
            .collect())
    }
}
