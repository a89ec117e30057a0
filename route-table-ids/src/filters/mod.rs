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

//! Attribute filters sent to the remote inventory API and their composition.
//!
//! Filters are AND-ed by the remote API; the values inside one filter are OR-ed.

mod composer;
pub use composer::compose_filters;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

pub const ROUTE_TABLE_ID_FIELD: &str = "route-table-id";
pub const SUBNET_ID_FIELD: &str = "association.subnet-id";
pub const VPC_ID_FIELD: &str = "vpc-id";
pub const TAG_FIELD_PREFIX: &str = "tag:";

/// A single `(field, value-set)` constraint.
#[derive(Clone, Debug, Deserialize, Serialize, Eq, Hash, PartialEq)]
pub struct AttributeFilter {
    pub name: String,
    pub values: BTreeSet<String>,
}

impl AttributeFilter {
    pub fn new<I, S>(name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds an exact-match filter with a single acceptable value.
    pub fn exact(name: &str, value: &str) -> Self {
        Self::new(name, [value])
    }

    /// Builds the filter matching route tables carrying tag `key` with `value`.
    pub fn tag(key: &str, value: &str) -> Self {
        Self::exact(&format!("{TAG_FIELD_PREFIX}{key}"), value)
    }

    /// Returns the tag key when this filter targets a specific tag.
    pub fn tag_key(&self) -> Option<&str> {
        self.name.strip_prefix(TAG_FIELD_PREFIX)
    }
}

impl Display for AttributeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=[", self.name)?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
