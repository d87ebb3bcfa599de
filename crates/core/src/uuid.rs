// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! A `UUID4` universally unique identifier (version 4) used to identify events.

use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Represents a Universally Unique Identifier (UUID) version 4 (RFC 4122).
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UUID4(Uuid);

impl UUID4 {
    /// Creates a new randomly generated [`UUID4`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UUID4 {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for UUID4 {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::try_parse(value)
            .map_err(|e| anyhow::anyhow!("Invalid UUID string '{value}': {e}"))?;
        anyhow::ensure!(
            uuid.get_version_num() == 4,
            "Invalid UUID version for '{value}', expected 4 was {}",
            uuid.get_version_num()
        );
        Ok(Self(uuid))
    }
}

impl From<&str> for UUID4 {
    /// Creates a [`UUID4`] from a string slice.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a valid version 4 UUID.
    fn from(value: &str) -> Self {
        value
            .parse()
            .unwrap_or_else(|e| panic!("{}: {e}", crate::correctness::FAILED))
    }
}

impl Debug for UUID4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}')", stringify!(UUID4), self.0)
    }
}

impl Display for UUID4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for UUID4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UUID4 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_new_is_version_4() {
        let uuid = UUID4::new();
        assert_eq!(uuid.as_uuid().get_version_num(), 4);
        assert_eq!(uuid.to_string().len(), 36);
    }

    #[rstest]
    fn test_new_values_are_unique() {
        assert_ne!(UUID4::new(), UUID4::new());
    }

    #[rstest]
    fn test_from_str_round_trip() {
        let value = "2d89666b-1a1e-4a75-b193-4eb3b454c757";
        let uuid = UUID4::from(value);
        assert_eq!(uuid.to_string(), value);
        assert_eq!(format!("{uuid:?}"), format!("UUID4('{value}')"));
    }

    #[rstest]
    #[case("")]
    #[case("not-a-uuid")]
    #[case("6ba7b810-9dad-11d1-80b4-00c04fd430c8")] // <-- version 1
    fn test_from_str_invalid(#[case] value: &str) {
        assert!(UUID4::from_str(value).is_err());
    }

    #[rstest]
    fn test_serde_round_trip() {
        let uuid = UUID4::new();
        let json = serde_json::to_string(&uuid).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));
        assert_eq!(serde_json::from_str::<UUID4>(&json).unwrap(), uuid);
    }
}
