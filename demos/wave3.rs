// SPDX-License-Identifier: MPL-2.0

//! `EcoFlow` Wave 3 control example.
//!
//! Reads credentials from the environment, then runs one operation.
//!
//! # Usage
//!
//! ```bash
//! export ECOFLOW_ACCESS_KEY=...
//! export ECOFLOW_SECRET_KEY=...
//! export ECOFLOW_SERIAL_NUMBER=R331ZEB4ZE123456   # optional default device
//!
//! cargo run --example wave3 -- list
//! cargo run --example wave3 -- state [serial]
//! cargo run --example wave3 -- power <on|standby|shutdown> [serial]
//! cargo run --example wave3 -- mode <max|eco|sleep|manual> [serial]
//! cargo run --example wave3 -- selftest
//! ```

use std::env;

use ecoflow_lib::protocol::signer::reference;
use ecoflow_lib::{ClientConfig, EcoFlowClient, HttpTransport, PowerState, SubMode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let client = EcoFlowClient::new(ClientConfig::from_env()?)?;

    match args[1].as_str() {
        "list" => list(&client).await,
        "state" => state(&client, args.get(2)).await,
        "power" => {
            let state: PowerState = args.get(2).ok_or("missing power state")?.parse()?;
            let serial = serial(&client, args.get(3))?;
            client.change_power_state(&serial, state).await?;
            println!("{serial}: power {state}");
            Ok(())
        }
        "mode" => {
            let mode: SubMode = args.get(2).ok_or("missing sub-mode")?.parse()?;
            let serial = serial(&client, args.get(3))?;
            client.change_sub_mode(&serial, mode).await?;
            println!("{serial}: sub-mode {mode}");
            Ok(())
        }
        "selftest" => {
            let sign = client.test_call();
            let verdict = if sign == reference::EXPECTED_SIGN { "OK" } else { "MISMATCH" };
            println!("{sign} {verdict}");
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {program} list");
    eprintln!("  {program} state [serial]");
    eprintln!("  {program} power <on|standby|shutdown> [serial]");
    eprintln!("  {program} mode <max|eco|sleep|manual> [serial]");
    eprintln!("  {program} selftest");
}

fn serial(
    client: &EcoFlowClient<HttpTransport>,
    arg: Option<&String>,
) -> Result<String, Box<dyn std::error::Error>> {
    match arg {
        Some(serial) => Ok(serial.clone()),
        None => Ok(client.default_serial_number()?.to_string()),
    }
}

async fn list(client: &EcoFlowClient<HttpTransport>) -> Result<(), Box<dyn std::error::Error>> {
    let devices = client.list_devices().await?;
    if devices.is_empty() {
        println!("No devices");
    }
    for device in devices {
        let status = if device.is_online() { "online" } else { "offline" };
        println!("{}  {}  {status}", device.serial_number, device.device_name);
    }
    Ok(())
}

async fn state(
    client: &EcoFlowClient<HttpTransport>,
    arg: Option<&String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let serial = serial(client, arg)?;
    match client.get_full_state(&serial).await? {
        Some(state) => {
            let mut entries: Vec<_> = state.into_iter().collect();
            entries.sort();
            for (key, value) in entries {
                println!("{key} = {value}");
            }
        }
        None => println!("{serial}: no telemetry reported"),
    }
    Ok(())
}
