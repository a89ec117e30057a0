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

//! Boundary contract with the remote inventory API.

use crate::filters::AttributeFilter;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Coarse classification reported by a describer for a failed remote call.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RemoteErrorCode {
    Network,
    Unauthorized,
    Throttled,
    InvalidRequest,
    Internal,
}

impl Display for RemoteErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            RemoteErrorCode::Network => "network",
            RemoteErrorCode::Unauthorized => "unauthorized",
            RemoteErrorCode::Throttled => "throttled",
            RemoteErrorCode::InvalidRequest => "invalid_request",
            RemoteErrorCode::Internal => "internal",
        };
        write!(f, "{code}")
    }
}

/// Failure of the remote describe call, reported as-is by the describer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemoteError {
    pub code: RemoteErrorCode,
    pub message: String,
}

impl RemoteError {
    pub fn fail_with_code<T: Into<String>>(code: RemoteErrorCode, message: T) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl Error for RemoteError {}

/// One subnet (or gateway) association of a route table.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RouteTableAssociation {
    #[serde(default)]
    pub route_table_association_id: Option<String>,
    #[serde(default)]
    pub subnet_id: Option<String>,
    #[serde(default)]
    pub main: bool,
}

/// A route table as returned by the remote API. Only `route_table_id` is read by the lookup.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RemoteRouteTable {
    pub route_table_id: String,
    #[serde(default)]
    pub vpc_id: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub associations: Vec<RouteTableAssociation>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl RemoteRouteTable {
    pub fn new(route_table_id: &str) -> Self {
        Self {
            route_table_id: route_table_id.to_string(),
            ..Default::default()
        }
    }
}

///
/// [`RouteTableDescriber`] is the capability used to query route tables.
///
/// Implementations return the complete result set for one call; pagination,
/// retries, timeouts and credentials all live behind this trait.
#[async_trait]
pub trait RouteTableDescriber: Send + Sync {
    async fn describe_route_tables(
        &self,
        filters: &[AttributeFilter],
    ) -> Result<Vec<RemoteRouteTable>, RemoteError>;
}
