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

//! Criteria-to-filter translation.

use crate::criteria::LookupCriteria;
use crate::filters::{AttributeFilter, ROUTE_TABLE_ID_FIELD, SUBNET_ID_FIELD, VPC_ID_FIELD};
use std::collections::BTreeMap;

/// Composes the ordered filter list for one lookup.
///
/// Output order is scalar attribute filters (sorted by remote field name), then
/// one filter per tag in key order, then the caller's custom filters verbatim.
/// Nothing is deduplicated: a custom filter on a field that a scalar criterion
/// already constrains is sent as well. An empty result matches everything.
pub fn compose_filters(criteria: &LookupCriteria) -> Vec<AttributeFilter> {
    let mut attributes = BTreeMap::new();
    if let Some(vpc_id) = criteria.vpc_id() {
        attributes.insert(VPC_ID_FIELD, vpc_id);
    }
    if let Some(subnet_id) = criteria.subnet_id() {
        attributes.insert(SUBNET_ID_FIELD, subnet_id);
    }
    if let Some(route_table_id) = criteria.route_table_id() {
        attributes.insert(ROUTE_TABLE_ID_FIELD, route_table_id);
    }

    let mut filters = attribute_filters(&attributes);
    if let Some(tags) = criteria.tags() {
        filters.extend(tag_filters(tags));
    }
    filters.extend(
        criteria
            .custom_filters()
            .iter()
            .map(|custom| AttributeFilter::new(&custom.name, custom.values.iter().cloned())),
    );

    filters
}

fn attribute_filters(attributes: &BTreeMap<&str, &str>) -> Vec<AttributeFilter> {
    attributes
        .iter()
        .map(|(name, value)| AttributeFilter::exact(name, value))
        .collect()
}

fn tag_filters(tags: &BTreeMap<String, String>) -> Vec<AttributeFilter> {
    tags.iter()
        .map(|(key, value)| AttributeFilter::tag(key, value))
        .collect()
}
