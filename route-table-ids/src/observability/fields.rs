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

//! Canonical structured field keys and value-format helpers.

use crate::filters::AttributeFilter;

pub const EVENT: &str = "event";
pub const COMPONENT: &str = "component";
pub const FILTER_COUNT: &str = "filter_count";
pub const FILTERS: &str = "filters";
pub const MATCH_COUNT: &str = "match_count";
pub const RESULT_ID: &str = "result_id";
pub const ERR: &str = "err";
pub const PATH: &str = "path";

pub const NONE: &str = "none";

/// Renders a filter list as `name=[v1,v2];name=[v]`, or `none` when empty.
pub fn format_filters(filters: &[AttributeFilter]) -> String {
    if filters.is_empty() {
        return NONE.to_string();
    }

    filters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::{format_filters, NONE};
    use crate::filters::AttributeFilter;

    #[test]
    fn format_filters_returns_none_when_empty() {
        assert_eq!(format_filters(&[]), NONE);
    }

    #[test]
    fn format_filters_joins_in_request_order() {
        let filters = vec![
            AttributeFilter::exact("vpc-id", "vpc-1"),
            AttributeFilter::tag("Name", "prod"),
        ];

        assert_eq!(format_filters(&filters), "vpc-id=[vpc-1];tag:Name=[prod]");
    }
}
