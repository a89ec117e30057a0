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

//! Local evaluation of attribute filters against inventory entries.
//!
//! Filters are AND-ed; the values of one filter are OR-ed. Values are compared
//! exactly.

use route_table_ids::{
    AttributeFilter, RemoteRouteTable, ROUTE_TABLE_ID_FIELD, SUBNET_ID_FIELD, VPC_ID_FIELD,
};

const OWNER_ID_FIELD: &str = "owner-id";
const ASSOCIATION_ID_FIELD: &str = "association.route-table-association-id";
const ASSOCIATION_MAIN_FIELD: &str = "association.main";
const TAG_KEY_FIELD: &str = "tag-key";
const TAG_VALUE_FIELD: &str = "tag-value";

pub(crate) fn is_supported(filter: &AttributeFilter) -> bool {
    matches!(
        filter.name.as_str(),
        ROUTE_TABLE_ID_FIELD
            | VPC_ID_FIELD
            | SUBNET_ID_FIELD
            | OWNER_ID_FIELD
            | ASSOCIATION_ID_FIELD
            | ASSOCIATION_MAIN_FIELD
            | TAG_KEY_FIELD
            | TAG_VALUE_FIELD
    ) || tag_key(filter).is_some()
}

pub(crate) fn matches_all(route_table: &RemoteRouteTable, filters: &[AttributeFilter]) -> bool {
    filters
        .iter()
        .all(|filter| matches_filter(route_table, filter))
}

fn tag_key(filter: &AttributeFilter) -> Option<&str> {
    filter.tag_key().filter(|key| !key.is_empty())
}

fn matches_filter(route_table: &RemoteRouteTable, filter: &AttributeFilter) -> bool {
    let accepts = |candidate: &str| filter.values.contains(candidate);
    let associations = route_table.associations.iter();

    match filter.name.as_str() {
        ROUTE_TABLE_ID_FIELD => accepts(route_table.route_table_id.as_str()),
        VPC_ID_FIELD => route_table.vpc_id.as_deref().is_some_and(accepts),
        OWNER_ID_FIELD => route_table.owner_id.as_deref().is_some_and(accepts),
        SUBNET_ID_FIELD => associations
            .filter_map(|association| association.subnet_id.as_deref())
            .any(accepts),
        ASSOCIATION_ID_FIELD => associations
            .filter_map(|association| association.route_table_association_id.as_deref())
            .any(accepts),
        ASSOCIATION_MAIN_FIELD => associations
            .map(|association| association.main.to_string())
            .any(|main| accepts(main.as_str())),
        TAG_KEY_FIELD => route_table.tags.keys().any(|key| accepts(key.as_str())),
        TAG_VALUE_FIELD => route_table.tags.values().any(|value| accepts(value.as_str())),
        _ => match tag_key(filter) {
            Some(key) => route_table
                .tags
                .get(key)
                .is_some_and(|value| accepts(value.as_str())),
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{is_supported, matches_all};
    use route_table_ids::{AttributeFilter, RemoteRouteTable, RouteTableAssociation};
    use std::collections::BTreeMap;

    fn private_table() -> RemoteRouteTable {
        RemoteRouteTable {
            route_table_id: "rtb-1".to_string(),
            vpc_id: Some("vpc-1".to_string()),
            owner_id: Some("111122223333".to_string()),
            associations: vec![
                RouteTableAssociation {
                    route_table_association_id: Some("rtbassoc-1".to_string()),
                    subnet_id: Some("subnet-a".to_string()),
                    main: false,
                },
                RouteTableAssociation {
                    route_table_association_id: Some("rtbassoc-2".to_string()),
                    subnet_id: Some("subnet-b".to_string()),
                    main: false,
                },
            ],
            tags: BTreeMap::from([("Name".to_string(), "private".to_string())]),
        }
    }

    #[test]
    fn no_filters_match_everything() {
        assert!(matches_all(&private_table(), &[]));
    }

    #[test]
    fn values_within_a_filter_are_alternatives() {
        let filters = [AttributeFilter::new("vpc-id", ["vpc-9", "vpc-1"])];

        assert!(matches_all(&private_table(), &filters));
    }

    #[test]
    fn filters_are_conjunctive() {
        let filters = [
            AttributeFilter::exact("vpc-id", "vpc-1"),
            AttributeFilter::tag("Name", "public"),
        ];

        assert!(!matches_all(&private_table(), &filters));
    }

    #[test]
    fn subnet_filter_matches_any_association() {
        let filters = [AttributeFilter::exact("association.subnet-id", "subnet-b")];

        assert!(matches_all(&private_table(), &filters));
    }

    #[test]
    fn main_flag_is_compared_as_text() {
        assert!(matches_all(
            &private_table(),
            &[AttributeFilter::exact("association.main", "false")]
        ));
        assert!(!matches_all(
            &private_table(),
            &[AttributeFilter::exact("association.main", "true")]
        ));
    }

    #[test]
    fn tag_key_and_value_filters_inspect_all_tags() {
        assert!(matches_all(
            &private_table(),
            &[AttributeFilter::exact("tag-key", "Name")]
        ));
        assert!(matches_all(
            &private_table(),
            &[AttributeFilter::exact("tag-value", "private")]
        ));
        assert!(!matches_all(
            &private_table(),
            &[AttributeFilter::tag("Env", "private")]
        ));
    }

    #[test]
    fn unknown_names_are_unsupported() {
        let supported = |name: &str| is_supported(&AttributeFilter::exact(name, "x"));

        assert!(supported("tag:Name"));
        assert!(supported("association.subnet-id"));
        assert!(supported("association.main"));
        assert!(!supported("tag:"));
        assert!(!supported("route.destination-cidr-block-typo"));
    }

    #[test]
    fn main_flag_matches_any_association() {
        let mut table = private_table();
        table.associations.push(RouteTableAssociation {
            route_table_association_id: Some("rtbassoc-3".to_string()),
            subnet_id: None,
            main: true,
        });

        assert!(matches_all(
            &table,
            &[AttributeFilter::exact("association.main", "true")]
        ));
        assert!(matches_all(
            &table,
            &[AttributeFilter::new("association.main", ["true", "false"])]
        ));
    }

    #[test]
    fn empty_tag_key_never_matches() {
        assert!(!matches_all(
            &private_table(),
            &[AttributeFilter::exact("tag:", "private")]
        ));
    }
}
