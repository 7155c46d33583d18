// SPDX-FileCopyrightText: 2026 ade-available contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io::{self, Write};

use kandji_client::DeviceListResponse;

pub const NO_RESULTS: &str = "No available devices found.";

/// Write the plain-text summary of unassigned devices.
pub fn write_report<W: Write>(devices: &DeviceListResponse, mut out: W) -> io::Result<()> {
    if devices.results.is_empty() {
        writeln!(out, "{}", NO_RESULTS)?;
        return out.flush();
    }

    write!(out, "Found {} Unassigned Devices\n\n", devices.results.len())?;
    for device in &devices.results {
        write!(out, "{}\n{}\n\n", device.serial_number, device.model)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kandji_client::DeviceRecord;

    fn render(devices: &DeviceListResponse) -> String {
        let mut out = Vec::new();
        write_report(devices, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn no_results() {
        assert_eq!(
            render(&DeviceListResponse::default()),
            "No available devices found.\n"
        );
    }

    #[test]
    fn listing() {
        let devices = DeviceListResponse {
            results: vec![
                DeviceRecord {
                    serial_number: "C02XK1ZZJG5J".to_string(),
                    model: "MacBook Pro".to_string(),
                    ..DeviceRecord::default()
                },
                DeviceRecord {
                    serial_number: "FVFGQ0AAQ6L4".to_string(),
                    model: "iMac".to_string(),
                    ..DeviceRecord::default()
                },
            ],
            ..DeviceListResponse::default()
        };
        assert_eq!(
            render(&devices),
            "Found 2 Unassigned Devices\n\nC02XK1ZZJG5J\nMacBook Pro\n\nFVFGQ0AAQ6L4\niMac\n\n"
        );
    }
}
