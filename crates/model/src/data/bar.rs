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

//! Bar aggregate structures, data types and functionality.

use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use talon_core::{
    UnixNanos,
    correctness::{
        CorrectnessError, CorrectnessResult, FAILED, check_non_negative_i64, check_positive_decimal,
        check_positive_i64, check_predicate_true,
    },
    serialization::Serializable,
};

use crate::{
    enums::{QuoteType, Resolution},
    identifiers::Symbol,
};

/// Represents a bar type including the instrument symbol, period, resolution and quote type.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BarType {
    symbol: Symbol,
    period: i64,
    resolution: Resolution,
    quote_type: QuoteType,
}

impl BarType {
    /// Creates a new [`BarType`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is not positive (> 0).
    pub fn new_checked(
        symbol: Symbol,
        period: i64,
        resolution: Resolution,
        quote_type: QuoteType,
    ) -> CorrectnessResult<Self> {
        check_positive_i64(period, stringify!(period))?;
        Ok(Self {
            symbol,
            period,
            resolution,
            quote_type,
        })
    }

    /// Creates a new [`BarType`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period` is not positive (> 0).
    pub fn new(symbol: Symbol, period: i64, resolution: Resolution, quote_type: QuoteType) -> Self {
        Self::new_checked(symbol, period, resolution, quote_type).expect(FAILED)
    }

    /// Returns the instrument symbol for this bar type.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the number of resolution units aggregated into each bar.
    #[must_use]
    pub fn period(&self) -> i64 {
        self.period
    }

    /// Returns the time resolution for this bar type.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Returns the quote type for this bar type.
    #[must_use]
    pub fn quote_type(&self) -> QuoteType {
        self.quote_type
    }

    /// Returns the resolution as its canonical string.
    #[must_use]
    pub fn resolution_string(&self) -> &'static str {
        self.resolution.as_str()
    }

    /// Returns the quote type as its canonical string.
    #[must_use]
    pub fn quote_type_string(&self) -> &'static str {
        self.quote_type.as_str()
    }
}

impl Display for BarType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}[{}]",
            self.symbol, self.period, self.resolution, self.quote_type
        )
    }
}

impl FromStr for BarType {
    type Err = anyhow::Error;

    /// Parses a bar type from its canonical `<SYMBOL>-<PERIOD>-<RESOLUTION>[<QUOTE_TYPE>]` form.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let err = |reason: &str| anyhow::anyhow!("Error parsing `BarType` from '{s}': {reason}");

        let (head, quote_type) = s
            .strip_suffix(']')
            .and_then(|rest| rest.rsplit_once('['))
            .ok_or_else(|| err("missing '[QUOTE_TYPE]' suffix"))?;

        let mut pieces = head.rsplitn(3, '-');
        let (Some(resolution), Some(period), Some(symbol)) =
            (pieces.next(), pieces.next(), pieces.next())
        else {
            return Err(err("expected '<SYMBOL>-<PERIOD>-<RESOLUTION>'"));
        };

        let symbol = Symbol::from_str(symbol)?;
        let period = period
            .parse::<i64>()
            .map_err(|e| err(&format!("invalid period '{period}', {e}")))?;
        let resolution = Resolution::from_str(resolution)
            .map_err(|e| err(&format!("invalid resolution '{resolution}', {e}")))?;
        let quote_type = QuoteType::from_str(quote_type)
            .map_err(|e| err(&format!("invalid quote type '{quote_type}', {e}")))?;

        Ok(Self::new_checked(symbol, period, resolution, quote_type)?)
    }
}

impl Serialize for BarType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BarType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}

/// Represents an aggregated OHLCV bar.
///
/// Equality and hashing use the `timestamp` only, so bars are identified by their position
/// within a series.
///
/// Deserialization goes through [`Bar::new_checked`], trusted bulk data should be decoded as
/// [`DataBar`](super::DataBar) and lifted with [`Bar::new_unchecked`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "BarFields")]
pub struct Bar {
    /// The open price for the bar.
    pub open: Decimal,
    /// The high price for the bar.
    pub high: Decimal,
    /// The low price for the bar.
    pub low: Decimal,
    /// The close price for the bar.
    pub close: Decimal,
    /// The volume traded within the bar.
    pub volume: i64,
    /// UNIX timestamp (nanoseconds) when the bar closed.
    pub timestamp: UnixNanos,
}

impl Bar {
    /// Creates a new [`Bar`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error on the first of the following which holds:
    /// - `open`, `high`, `low` or `close` is not positive (> 0).
    /// - `volume` is negative.
    /// - `high` is less than `low`.
    /// - `high` is less than `close`.
    /// - `low` is greater than `close`.
    pub fn new_checked(
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: i64,
        timestamp: UnixNanos,
    ) -> CorrectnessResult<Self> {
        check_positive_decimal(open, stringify!(open))?;
        check_positive_decimal(high, stringify!(high))?;
        check_positive_decimal(low, stringify!(low))?;
        check_positive_decimal(close, stringify!(close))?;
        check_non_negative_i64(volume, stringify!(volume))?;
        check_predicate_true(high >= low, "`high` was less than `low`")?;
        check_predicate_true(high >= close, "`high` was less than `close`")?;
        check_predicate_true(low <= close, "`low` was greater than `close`")?;

        Ok(Self::new_unchecked(open, high, low, close, volume, timestamp))
    }

    /// Creates a new [`Bar`] instance.
    ///
    /// # Panics
    ///
    /// Panics if any of the [`Bar::new_checked`] conditions fail.
    pub fn new(
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: i64,
        timestamp: UnixNanos,
    ) -> Self {
        Self::new_checked(open, high, low, close, volume, timestamp).expect(FAILED)
    }

    /// Creates a new [`Bar`] instance without any correctness checking.
    ///
    /// Intended for trusted bulk data (historical backfills) where the values have already
    /// been validated at the source.
    #[must_use]
    pub fn new_unchecked(
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: i64,
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
}

#[derive(Deserialize)]
struct BarFields {
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: i64,
    timestamp: UnixNanos,
}

impl TryFrom<BarFields> for Bar {
    type Error = CorrectnessError;

    fn try_from(fields: BarFields) -> Result<Self, Self::Error> {
        Self::new_checked(
            fields.open,
            fields.high,
            fields.low,
            fields.close,
            fields.volume,
            fields.timestamp,
        )
    }
}

impl PartialEq for Bar {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp
    }
}

impl Eq for Bar {}

impl Hash for Bar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.timestamp.hash(state);
    }
}

impl Display for Bar {
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

impl Serializable for Bar {}
