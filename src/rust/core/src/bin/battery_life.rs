// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! battery_life — CLI binary for the battery ageing kernel
//!
//! Takes a tagged JSON request on stdin or as --json argument, sweeps the EV
//! or stationary pipeline over the requested horizon and prints the
//! SimulationResponse (trajectory + events) as JSON.
//!
//! Usage:
//!   echo '{"kind":"ev","distance":1500,"distanceUnit":"month"}' | battery_life
//!   battery_life --json '{"kind":"solar","cycleCount":2}' --config '{"samplesPerUnit":4}'
//!
//! Missing request fields take the web form defaults. Set RUST_LOG=debug for
//! timing output on stderr.

use std::env;
use std::io::{self, Read};

use batlife_core::logging::init_logging;
use batlife_core::{AgeingError, BatteryLifeKernel, KernelConfig, SimulationRequest, SimulationResponse};

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let input = match flag_value(&args, "--json") {
        Some(json) => json,
        None => match read_stdin() {
            Ok(text) => text,
            Err(e) => {
                eprintln!("ERROR: Failed to read stdin: {}", e);
                std::process::exit(1);
            }
        },
    };

    match run(&input, flag_value(&args, "--config").as_deref()) {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("ERROR: Failed to serialise response: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(input: &str, config: Option<&str>) -> Result<SimulationResponse, AgeingError> {
    let request: SimulationRequest = serde_json::from_str(input)?;
    let config: KernelConfig = match config {
        Some(json) => serde_json::from_str(json)?,
        None => KernelConfig::default(),
    };

    match request {
        SimulationRequest::Ev(input) => BatteryLifeKernel::simulate_ev(&input, &config),
        SimulationRequest::Solar(input) => BatteryLifeKernel::simulate_solar(&input, &config),
    }
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn read_stdin() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
