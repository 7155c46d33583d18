// SPDX-FileCopyrightText: 2026 ade-available contributors
//
// SPDX-License-Identifier: MPL-2.0

//! Client for the Kandji Automated Device Enrollment device list.

use log::{debug, warn};
use reqwest::{header::CONTENT_TYPE, StatusCode};

mod error;
mod model;

pub use error::{DecodeError, Error, StatusError};
pub use model::{DepAccountInfo, DeviceListResponse, DeviceRecord, MdmDeviceInfo};

pub const API_DOMAIN: &str = "api.kandji.io";
pub const DEVICES_PATH: &str = "/api/v1/integrations/apple/ade/devices";

/// Full device list URL for a tenant.
pub fn devices_url(subdomain: &str) -> String {
    format!("https://{}.{}{}", subdomain, API_DOMAIN, DEVICES_PATH)
}

pub struct Client {
    client: reqwest::blocking::Client,
}

impl Client {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(Error::Transport)?;
        Ok(Self { client })
    }

    /// Fetch the first page of ADE devices. Cursors in the response are not
    /// followed.
    pub fn devices(&self, api_key: &str, url: &str) -> Result<DeviceListResponse, Error> {
        debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(api_key)
            .send()
            .map_err(Error::Transport)?;

        let status = resp.status();
        debug!("{} from {}", status, url);
        if status != StatusCode::OK {
            return Err(StatusError {
                endpoint: url.to_string(),
                code: status.as_u16(),
                canonical_reason: status.canonical_reason().map(str::to_string),
            }
            .into());
        }

        let body = resp.bytes().map_err(DecodeError::Body)?;
        let devices: DeviceListResponse = serde_json::from_slice(&body)?;

        if devices.count > devices.results.len() as i64 {
            warn!(
                "API reports {} devices but only {} were returned; later pages are not fetched",
                devices.count,
                devices.results.len()
            );
        }
        Ok(devices)
    }
}

pub fn fetch_devices(api_key: &str, url: &str) -> Result<DeviceListResponse, Error> {
    Client::new()?.devices(api_key, url)
}
