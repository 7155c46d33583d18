// SPDX-FileCopyrightText: 2026 ade-available contributors
//
// SPDX-License-Identifier: MPL-2.0

use std::env;

fn main() {
    let key = env::var("KANDJI_API_KEY").unwrap();
    let subdomain = env::var("KANDJI_API_SUBDOMAIN").unwrap();
    let url = kandji_client::devices_url(&subdomain);
    let devices = kandji_client::fetch_devices(&key, &url).unwrap();
    println!("count: {}", devices.count);
    for device in &devices.results {
        println!("{:#?}", device);
    }
}
