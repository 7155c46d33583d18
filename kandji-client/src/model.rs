// SPDX-FileCopyrightText: 2026 ade-available contributors
//
// SPDX-License-Identifier: MPL-2.0

use serde::{
    de::Visitor, forward_to_deserialize_any, Deserialize, Deserializer, Serialize, Serializer,
};
use time::OffsetDateTime;

/// Hands struct requests to `deserialize_map`, so a JSON array in place of
/// an object is a type error instead of a positional field fill.
struct MapOnly<D>(D);

impl<'de, D: Deserializer<'de>> Deserializer<'de> for MapOnly<D> {
    type Error = D::Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, D::Error> {
        self.0.deserialize_map(visitor)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, D::Error> {
        self.0.deserialize_map(visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}

// Derives are generated as inherent fns (`remote = "Self"`); the trait impls
// route decoding through `MapOnly`.
macro_rules! object_only {
    ($($ty:ident),*) => {$(
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $ty::deserialize(MapOnly(deserializer))
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $ty::serialize(self, serializer)
            }
        }
    )*};
}

object_only!(DeviceListResponse, DeviceRecord, MdmDeviceInfo, DepAccountInfo);

// Absent and `null` both decode to the zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of `GET /api/v1/integrations/apple/ade/devices`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, remote = "Self")]
pub struct DeviceListResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
    /// Pagination cursors. Never followed.
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<DeviceRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, remote = "Self")]
pub struct DeviceRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub serial_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub asset_tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(deserialize_with = "null_as_default")]
    pub device_family: String,
    #[serde(deserialize_with = "null_as_default")]
    pub os: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Assigned user, empty when the device is unassigned.
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub device_assigned_by: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub device_assigned_date: Option<OffsetDateTime>,
    #[serde(deserialize_with = "null_as_default")]
    pub last_assignment_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub failed_assignment_attempts: i64,
    #[serde(with = "time::serde::rfc3339::option")]
    pub assignment_status_received_at: Option<OffsetDateTime>,
    pub mdm_device: Option<MdmDeviceInfo>,
    pub dep_account: Option<DepAccountInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub blueprint_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub blueprint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_status: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub profile_assign_time: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub profile_push_time: Option<OffsetDateTime>,
}

impl DeviceRecord {
    pub fn is_assigned(&self) -> bool {
        !self.user.is_empty()
    }

    /// Case-sensitive substring match, so "iMac" and "MacBook Air" both count.
    pub fn is_mac(&self) -> bool {
        self.model.contains("Mac")
    }
}

/// Enrollment state reported by the MDM side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, remote = "Self")]
pub struct MdmDeviceInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub enrolled_at: Option<OffsetDateTime>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enrollment_status: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub deferred_install: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_missing: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_removed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, remote = "Self")]
pub struct DepAccountInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub server_name: String,
}
