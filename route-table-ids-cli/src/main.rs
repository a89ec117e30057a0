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

mod config;

use crate::config::Config;
use clap::Parser;
use route_table_ids::{read_route_table_ids, RouteTableDescriber};
use route_table_static_file::RouteTableStaticFile;
use std::error::Error;
use std::fs;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command()]
struct LookupArgs {
    #[arg(short, long, value_name = "FILE")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args = LookupArgs::parse();

    let contents = fs::read_to_string(&args.config)
        .map_err(|e| format!("Unable to read config file: {e:?}"))?;

    let config = Config::from_json5(&contents)
        .map_err(|e| format!("Unable to parse config file: {e:?}"))?;

    info!(
        "Resolving route table ids from inventory '{}'",
        config.inventory_config.file_path
    );

    let inventory = RouteTableStaticFile::new(config.inventory_config.file_path);
    let describer: Arc<dyn RouteTableDescriber> = Arc::new(inventory);

    let state = read_route_table_ids(describer, config.criteria).await?;

    println!("{}", serde_json::to_string_pretty(&state)?);

    Ok(())
}
