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

//! Lookup execution: one remote describe call, validated and reduced to identifiers.

mod executor;
mod lookup_error;
mod lookup_result;

pub use executor::RouteTableLookup;
pub use lookup_error::{LookupError, EMPTY_RESULT_MESSAGE};
pub use lookup_result::LookupResult;
