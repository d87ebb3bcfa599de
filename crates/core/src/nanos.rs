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

//! A `UnixNanos` type for working with UTC timestamps in nanoseconds since the UNIX epoch.
//!
//! String values may be parsed from either:
//! - A numeric string (interpreted as nanoseconds).
//! - An RFC 3339 formatted timestamp (ISO 8601 with timezone).

use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Represents a timestamp in nanoseconds since the UNIX epoch (UTC).
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UnixNanos(u64);

impl UnixNanos {
    /// Creates a new [`UnixNanos`] instance.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns `true` if the value of this instance is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the underlying value as `u64`.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Converts the underlying value to a datetime (UTC).
    ///
    /// # Panics
    ///
    /// Panics if the value exceeds `i64::MAX` (approximately year 2262).
    #[must_use]
    pub fn to_datetime_utc(&self) -> DateTime<Utc> {
        let nanos = i64::try_from(self.0).expect("UnixNanos value exceeds i64::MAX");
        DateTime::from_timestamp_nanos(nanos)
    }

    /// Converts the underlying value to an ISO 8601 (RFC 3339) string in UTC.
    ///
    /// Sub-second digits are only rendered when non-zero. Values beyond the datetime range
    /// (above `i64::MAX`) are rendered as raw nanoseconds.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        match i64::try_from(self.0) {
            Ok(nanos) => DateTime::from_timestamp_nanos(nanos)
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            Err(_) => self.0.to_string(),
        }
    }
}

impl From<u64> for UnixNanos {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UnixNanos> for u64 {
    fn from(value: UnixNanos) -> Self {
        value.0
    }
}

impl TryFrom<DateTime<Utc>> for UnixNanos {
    type Error = anyhow::Error;

    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        let nanos = value
            .timestamp_nanos_opt()
            .ok_or_else(|| anyhow::anyhow!("Timestamp out of range: {value}"))?;
        let nanos = u64::try_from(nanos)
            .map_err(|_| anyhow::anyhow!("Unix timestamp cannot be negative: {value}"))?;
        Ok(Self(nanos))
    }
}

impl FromStr for UnixNanos {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(nanos) = s.parse::<u64>() {
            return Ok(Self(nanos));
        }

        let datetime = DateTime::parse_from_rfc3339(s)
            .map_err(|e| anyhow::anyhow!("Invalid timestamp '{s}': {e}"))?;
        Self::try_from(datetime.with_timezone(&Utc))
    }
}

impl Display for UnixNanos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
