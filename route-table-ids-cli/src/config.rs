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

use route_table_ids::LookupCriteria;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub(crate) inventory_config: InventoryConfig,
    #[serde(default)]
    pub(crate) criteria: LookupCriteria,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct InventoryConfig {
    pub(crate) file_path: String,
}

impl Config {
    pub fn from_json5(contents: &str) -> Result<Self, json5::Error> {
        json5::from_str(contents)
    }
}
