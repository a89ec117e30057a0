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
use route_table_ids::{
    AttributeFilter, RemoteError, RemoteErrorCode, RemoteRouteTable, RouteTableDescriber,
};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Fails every describe call with the configured error, recording the filters it was sent.
pub struct DescriberFailing {
    name: Arc<String>,
    error: RemoteError,
    calls: Mutex<Vec<Vec<AttributeFilter>>>,
}

impl DescriberFailing {
    pub fn new(name: &str, code: RemoteErrorCode, message: &str) -> Self {
        Self {
            name: Arc::new(name.to_string()),
            error: RemoteError::fail_with_code(code, message),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn error(&self) -> &RemoteError {
        &self.error
    }

    pub fn calls(&self) -> Vec<Vec<AttributeFilter>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RouteTableDescriber for DescriberFailing {
    async fn describe_route_tables(
        &self,
        filters: &[AttributeFilter],
    ) -> Result<Vec<RemoteRouteTable>, RemoteError> {
        debug!("{}: failing describe with {filters:?}", self.name);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(filters.to_vec());
        }
        Err(self.error.clone())
    }
}
