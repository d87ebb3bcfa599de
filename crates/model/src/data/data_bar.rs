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

//! A `DataBar` type for bulk ingestion of historical bar data.

use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

use derive_builder::Builder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use talon_core::{UnixNanos, serialization::Serializable};

use super::bar::Bar;

/// Represents an OHLCV bar held in `f64` precision, as loaded from historical data files.
///
/// No correctness checks are performed on construction. Equality compares the `open` and
/// `timestamp` only, and hashing uses the `timestamp` only.
#[repr(C)]
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Builder)]
#[builder(derive(Debug))]
pub struct DataBar {
    /// The open price for the bar.
    pub open: f64,
    /// The high price for the bar.
    pub high: f64,
    /// The low price for the bar.
    pub low: f64,
    /// The close price for the bar.
    pub close: f64,
    /// The volume traded within the bar.
    pub volume: f64,
    /// UNIX timestamp (nanoseconds) when the bar closed.
    pub timestamp: UnixNanos,
}

impl DataBar {
    /// Creates a new [`DataBar`] instance.
    #[must_use]
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: UnixNanos,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }

    /// Converts this bar to a decimal [`Bar`] through the unchecked construction path.
    ///
    /// Volume is rounded to the nearest whole unit.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not finite or is out of the representable range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_bar_unchecked(&self) -> anyhow::Result<Bar> {
        let to_decimal = |value: f64, label: &str| {
            Decimal::try_from(value)
                .map_err(|e| anyhow::anyhow!("Cannot convert {label} {value} to decimal: {e}"))
        };

        anyhow::ensure!(
            self.volume.is_finite() && self.volume.abs() < i64::MAX as f64,
            "Cannot convert volume {} to an integer",
            self.volume
        );

        Ok(Bar::new_unchecked(
            to_decimal(self.open, stringify!(open))?,
            to_decimal(self.high, stringify!(high))?,
            to_decimal(self.low, stringify!(low))?,
            to_decimal(self.close, stringify!(close))?,
            self.volume.round() as i64,
            self.timestamp,
        ))
    }
}

impl PartialEq for DataBar {
    fn eq(&self, other: &Self) -> bool {
        self.open == other.open && self.timestamp == other.timestamp
    }
}

/// Equality is not reflexive for a bar with a NaN `open`.
impl Eq for DataBar {}

impl Hash for DataBar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.timestamp.hash(state);
    }
}

impl Display for DataBar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.timestamp.to_rfc3339()
        )
    }
}

impl Serializable for DataBar {}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::collections::{HashSet, hash_map::DefaultHasher};

    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::data::stubs::*;

    fn hash_of(bar: &DataBar) -> u64 {
        let mut hasher = DefaultHasher::new();
        bar.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_new_performs_no_checks() {
        let bar = DataBar::new(-1.0, 0.0, 5.0, -2.0, -10.0, UnixNanos::default());
        assert_eq!(bar.open, -1.0);
        assert_eq!(bar.volume, -10.0);
    }

    #[rstest]
    fn test_builder(data_bar_audusd: DataBar) {
        let bar = DataBarBuilder::default()
            .open(1.00001)
            .high(1.00004)
            .low(1.0)
            .close(1.00003)
            .volume(100_000.0)
            .timestamp(data_bar_audusd.timestamp)
            .build()
            .unwrap();
        assert_eq!(bar, data_bar_audusd);
        assert_eq!(bar.close, data_bar_audusd.close);
    }

    #[rstest]
    fn test_builder_missing_field_fails() {
        let result = DataBarBuilder::default().open(1.0).build();
        assert!(result.is_err());
    }

    #[rstest]
    fn test_display(data_bar_audusd: DataBar) {
        assert_eq!(
            data_bar_audusd.to_string(),
            "1.00001,1.00004,1,1.00003,100000,2018-01-01T12:00:00Z"
        );
    }

    #[rstest]
    fn test_equality_uses_open_and_timestamp(data_bar_audusd: DataBar) {
        let other = DataBar {
            high: 2.0,
            low: 0.5,
            close: 1.5,
            volume: 1.0,
            ..data_bar_audusd
        };
        assert_eq!(other, data_bar_audusd);
        assert_eq!(hash_of(&other), hash_of(&data_bar_audusd));

        let other_open = DataBar {
            open: 1.00002,
            ..data_bar_audusd
        };
        assert_ne!(other_open, data_bar_audusd);
        assert_eq!(hash_of(&other_open), hash_of(&data_bar_audusd));
    }

    #[rstest]
    fn test_hash_set_dedupes_on_open_and_timestamp(data_bar_audusd: DataBar) {
        let revised = DataBar {
            close: 1.00002,
            volume: 90_000.0,
            ..data_bar_audusd
        };
        let other_open = DataBar {
            open: 1.00002,
            ..data_bar_audusd
        };
        let later = DataBar {
            timestamp: UnixNanos::from(data_bar_audusd.timestamp.as_u64() + 60_000_000_000),
            ..data_bar_audusd
        };

        let set: HashSet<DataBar> = [data_bar_audusd, revised, other_open, later]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&revised));
    }

    #[rstest]
    fn test_display_with_timestamp_beyond_datetime_range() {
        let bar = DataBar::new(1.5, 2.0, 1.0, 1.5, 10.0, UnixNanos::new(u64::MAX));
        assert_eq!(bar.to_string(), format!("1.5,2,1,1.5,10,{}", u64::MAX));
    }

    #[rstest]
    fn test_to_bar_unchecked(data_bar_audusd: DataBar) {
        let bar = data_bar_audusd.to_bar_unchecked().unwrap();
        assert_eq!(bar.open, dec!(1.00001));
        assert_eq!(bar.high, dec!(1.00004));
        assert_eq!(bar.low, dec!(1));
        assert_eq!(bar.close, dec!(1.00003));
        assert_eq!(bar.volume, 100_000);
        assert_eq!(bar.timestamp, data_bar_audusd.timestamp);
    }

    #[rstest]
    fn test_to_bar_unchecked_keeps_inconsistent_values() {
        let bar = DataBar::new(1.0, 0.9, 0.95, 0.92, 10.4, UnixNanos::default())
            .to_bar_unchecked()
            .unwrap();
        assert_eq!(bar.high, dec!(0.9));
        assert_eq!(bar.volume, 10);
    }

    #[rstest]
    #[case(f64::NAN, 1.0)]
    #[case(1.0, f64::INFINITY)]
    fn test_to_bar_unchecked_with_non_finite_values(#[case] open: f64, #[case] volume: f64) {
        let bar = DataBar::new(open, 1.0, 1.0, 1.0, volume, UnixNanos::default());
        assert!(bar.to_bar_unchecked().is_err());
    }

    #[rstest]
    fn test_json_round_trip(data_bar_audusd: DataBar) {
        let bytes = data_bar_audusd.to_json_bytes().unwrap();
        let decoded = DataBar::from_json_bytes(&bytes).unwrap();
        assert_eq!(decoded, data_bar_audusd);
        assert_eq!(decoded.volume, data_bar_audusd.volume);
    }
}
