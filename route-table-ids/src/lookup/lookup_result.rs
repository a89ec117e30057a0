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

use uuid::Uuid;

/// Outcome of one successful lookup.
///
/// `id` identifies this invocation's result for the host's bookkeeping. It is
/// freshly generated every time and is unrelated to any route table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LookupResult {
    id: String,
    ids: Vec<String>,
}

impl LookupResult {
    pub(crate) fn new(ids: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ids,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Matched identifiers, in the order the remote API returned them.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.id, self.ids)
    }
}
