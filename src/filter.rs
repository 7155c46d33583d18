// SPDX-FileCopyrightText: 2026 ade-available contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use kandji_client::DeviceListResponse;

/// Macs with no assigned user, in their original order.
///
/// Only `results` is populated; `count` and the cursors are left at their
/// zero values rather than recomputed.
pub fn unassigned_macs(devices: &DeviceListResponse) -> DeviceListResponse {
    DeviceListResponse {
        results: devices
            .results
            .iter()
            .filter(|device| !device.is_assigned() && device.is_mac())
            .cloned()
            .collect(),
        ..DeviceListResponse::default()
    }
}
