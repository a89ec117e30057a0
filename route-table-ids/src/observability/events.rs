//! Canonical structured event names used across `route-table-ids`.

// Lookup pipeline events.
pub const LOOKUP_START: &str = "lookup_start";
pub const LOOKUP_FILTERS_COMPOSED: &str = "lookup_filters_composed";
pub const LOOKUP_REMOTE_FAILED: &str = "lookup_remote_failed";
pub const LOOKUP_EMPTY_RESULT: &str = "lookup_empty_result";
pub const LOOKUP_OK: &str = "lookup_ok";

// Static inventory events.
pub const STATIC_INVENTORY_LOAD_START: &str = "static_inventory_load_start";
pub const STATIC_INVENTORY_LOAD_OK: &str = "static_inventory_load_ok";
pub const STATIC_INVENTORY_LOAD_FAILED: &str = "static_inventory_load_failed";
pub const STATIC_INVENTORY_FILTER_REJECTED: &str = "static_inventory_filter_rejected";
