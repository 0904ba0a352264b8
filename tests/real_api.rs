// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests against the real `EcoFlow` cloud.
//!
//! These tests need developer credentials and a bound device, and are
//! ignored by default.
//! Run with: `cargo test --test real_api -- --ignored --test-threads=1`
//!
//! # Environment Variables
//!
//! - `ECOFLOW_ACCESS_KEY` - Developer access key
//! - `ECOFLOW_SECRET_KEY` - Developer secret key
//! - `ECOFLOW_SERIAL_NUMBER` - Serial number of a test device
//!
//! The command tests switch the device to `Eco` and leave it powered on.

use ecoflow_lib::protocol::signer::reference;
use ecoflow_lib::{ClientConfig, EcoFlowClient, HttpTransport, SubMode};

fn client() -> Option<EcoFlowClient<HttpTransport>> {
    match ClientConfig::from_env() {
        Ok(config) => Some(EcoFlowClient::new(config).unwrap()),
        Err(e) => {
            eprintln!("Skipping: {e}");
            None
        }
    }
}

#[tokio::test]
#[ignore = "requires EcoFlow credentials"]
async fn real_list_devices() {
    let Some(client) = client() else { return };
    let devices = client.list_devices().await.unwrap();
    for device in &devices {
        println!(
            "{} {} online={}",
            device.serial_number,
            device.device_name,
            device.is_online()
        );
    }
}

#[tokio::test]
#[ignore = "requires EcoFlow credentials and a device"]
async fn real_full_state() {
    let Some(client) = client() else { return };
    let serial = client.default_serial_number().unwrap().to_string();
    let state = client.get_full_state(&serial).await.unwrap();
    println!("{} quotas", state.map_or(0, |s| s.len()));
}

#[tokio::test]
#[ignore = "changes device state"]
async fn real_commands() {
    let Some(client) = client() else { return };
    let serial = client.default_serial_number().unwrap().to_string();
    client.power_on(&serial).await.unwrap();
    client.change_sub_mode(&serial, SubMode::Eco).await.unwrap();
}

#[test]
fn self_test_needs_no_credentials() {
    let client = EcoFlowClient::new(ClientConfig::new("unused", "unused")).unwrap();
    assert_eq!(client.test_call(), reference::EXPECTED_SIGN);
}
