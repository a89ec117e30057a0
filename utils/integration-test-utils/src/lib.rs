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

mod describer_failing;
pub use describer_failing::DescriberFailing;
mod describer_recording;
pub use describer_recording::DescriberRecording;

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly `tracing` subscriber once per process; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn vpc_id() -> String {
    "vpc-0123456789abcdef0".to_string()
}
