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

use async_trait::async_trait;
use route_table_ids::{AttributeFilter, RemoteError, RemoteRouteTable, RouteTableDescriber};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Answers every describe call with a fixed inventory and records the filters it was sent.
///
/// The fixed inventory is returned as-is; no filter evaluation happens here.
pub struct DescriberRecording {
    name: Arc<String>,
    route_tables: Vec<RemoteRouteTable>,
    calls: Mutex<Vec<Vec<AttributeFilter>>>,
}

impl DescriberRecording {
    pub fn new(name: &str, route_table_ids: &[&str]) -> Self {
        Self::with_route_tables(
            name,
            route_table_ids
                .iter()
                .map(|route_table_id| RemoteRouteTable::new(route_table_id))
                .collect(),
        )
    }

    pub fn with_route_tables(name: &str, route_tables: Vec<RemoteRouteTable>) -> Self {
        Self {
            name: Arc::new(name.to_string()),
            route_tables,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Filters received so far, one entry per describe call.
    pub fn calls(&self) -> Vec<Vec<AttributeFilter>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RouteTableDescriber for DescriberRecording {
    async fn describe_route_tables(
        &self,
        filters: &[AttributeFilter],
    ) -> Result<Vec<RemoteRouteTable>, RemoteError> {
        debug!("{}: describing route tables with {filters:?}", self.name);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(filters.to_vec());
        }
        Ok(self.route_tables.clone())
    }
}
