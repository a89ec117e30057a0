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

//! Caller-supplied lookup criteria.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A caller-supplied filter passed through to the remote API without interpretation.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CustomFilter {
    pub name: String,
    pub values: BTreeSet<String>,
}

impl CustomFilter {
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
}

///
/// [`LookupCriteria`] is the statically shaped input of one route table lookup.
///
/// Every field is optional and an absent field does not constrain the lookup.
/// Scalar fields holding an empty string count as absent. A criteria value with
/// nothing set is legal and matches every route table visible to the caller.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use route_table_ids::LookupCriteria;
///
/// let criteria = LookupCriteria {
///     vpc_id: Some("vpc-0a1b2c".to_string()),
///     tags: Some(BTreeMap::from([("Name".to_string(), "prod".to_string())])),
///     ..Default::default()
/// };
///
/// assert_eq!(criteria.vpc_id(), Some("vpc-0a1b2c"));
/// assert_eq!(criteria.subnet_id(), None);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LookupCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<CustomFilter>>,
}

impl LookupCriteria {
    pub fn route_table_id(&self) -> Option<&str> {
        non_empty(&self.route_table_id)
    }

    pub fn subnet_id(&self) -> Option<&str> {
        non_empty(&self.subnet_id)
    }

    pub fn vpc_id(&self) -> Option<&str> {
        non_empty(&self.vpc_id)
    }

    pub fn tags(&self) -> Option<&BTreeMap<String, String>> {
        self.tags.as_ref()
    }

    pub fn custom_filters(&self) -> &[CustomFilter] {
        self.filter.as_deref().unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
