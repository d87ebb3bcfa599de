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

//! A `Tick` data type representing a top-of-book bid/ask quote.

use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use talon_core::{
    UnixNanos,
    correctness::{CorrectnessError, CorrectnessResult, FAILED, check_positive_decimal},
    serialization::Serializable,
};

use crate::identifiers::Symbol;

/// Represents a single bid/ask quote for a financial market instrument.
///
/// Equality compares every field, while hashing uses the `timestamp` only. Ticks which are
/// equal therefore always hash identically, and ticks for different symbols sharing a
/// timestamp collide without comparing equal.
///
/// Deserialization goes through [`Tick::new_checked`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "TickFields")]
pub struct Tick {
    /// The quoted instrument symbol.
    pub symbol: Symbol,
    /// The best bid price.
    pub bid: Decimal,
    /// The best ask price.
    pub ask: Decimal,
    /// UNIX timestamp (nanoseconds) when the quote occurred.
    pub timestamp: UnixNanos,
}

impl Tick {
    /// Creates a new [`Tick`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `bid` is not positive (> 0).
    /// - `ask` is not positive (> 0).
    pub fn new_checked(
        symbol: Symbol,
        bid: Decimal,
        ask: Decimal,
        timestamp: UnixNanos,
    ) -> CorrectnessResult<Self> {
        check_positive_decimal(bid, stringify!(bid))?;
        check_positive_decimal(ask, stringify!(ask))?;
        Ok(Self {
            symbol,
            bid,
            ask,
            timestamp,
        })
    }

    /// Creates a new [`Tick`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `bid` or `ask` is not positive (> 0).
    pub fn new(symbol: Symbol, bid: Decimal, ask: Decimal, timestamp: UnixNanos) -> Self {
        Self::new_checked(symbol, bid, ask, timestamp).expect(FAILED)
    }

    /// Returns the quoted spread (ask minus bid).
    #[must_use]
    pub fn spread(&self) -> Decimal {
        self.ask - self.bid
    }
}

#[derive(Deserialize)]
struct TickFields {
    symbol: Symbol,
    bid: Decimal,
    ask: Decimal,
    timestamp: UnixNanos,
}

impl TryFrom<TickFields> for Tick {
    type Error = CorrectnessError;

    fn try_from(fields: TickFields) -> Result<Self, Self::Error> {
        Self::new_checked(fields.symbol, fields.bid, fields.ask, fields.timestamp)
    }
}

impl PartialEq for Tick {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
            && self.bid == other.bid
            && self.ask == other.ask
            && self.timestamp == other.timestamp
    }
}

impl Eq for Tick {}

impl Hash for Tick {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.timestamp.hash(state);
    }
}

impl Display for Tick {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.bid, self.ask, self.timestamp.to_rfc3339())
    }
}

impl Serializable for Tick {}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        data::stubs::*,
        identifiers::stubs::{symbol_audusd_fxcm, symbol_gbpusd_fxcm},
    };

    fn hash_of(tick: &Tick) -> u64 {
        let mut hasher = DefaultHasher::new();
        tick.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_new_with_valid_prices(symbol_audusd_fxcm: Symbol) {
        let tick = Tick::new(symbol_audusd_fxcm, dec!(1.0), dec!(1.1), UnixNanos::from(1_000));
        assert_eq!(tick.bid, dec!(1.0));
        assert_eq!(tick.ask, dec!(1.1));
        assert_eq!(tick.spread(), dec!(0.1));
    }

    #[rstest]
    #[case(dec!(0), dec!(1.1), "bid")]
    #[case(dec!(-1.0), dec!(1.1), "bid")]
    #[case(dec!(1.0), dec!(0), "ask")]
    #[case(dec!(0), dec!(0), "bid")]
    fn test_new_checked_with_non_positive_price(
        symbol_audusd_fxcm: Symbol,
        #[case] bid: Decimal,
        #[case] ask: Decimal,
        #[case] label: &str,
    ) {
        let err =
            Tick::new_checked(symbol_audusd_fxcm, bid, ask, UnixNanos::default()).unwrap_err();
        assert_eq!(err.label(), Some(label));
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_new_with_zero_bid_panics(symbol_audusd_fxcm: Symbol) {
        let _ = Tick::new(symbol_audusd_fxcm, dec!(0), dec!(1.1), UnixNanos::default());
    }

    #[rstest]
    fn test_display(tick_audusd: Tick) {
        assert_eq!(tick_audusd.to_string(), "1.00000,1.00010,2018-01-01T12:00:00Z");
    }

    #[rstest]
    fn test_equality_compares_all_fields(tick_audusd: Tick, symbol_gbpusd_fxcm: Symbol) {
        let mut other = tick_audusd;
        assert_eq!(other, tick_audusd);

        other.ask = dec!(1.00020);
        assert_ne!(other, tick_audusd);

        let other_symbol = Tick {
            symbol: symbol_gbpusd_fxcm,
            ..tick_audusd
        };
        assert_ne!(other_symbol, tick_audusd);
    }

    #[rstest]
    fn test_hash_uses_timestamp_only(tick_audusd: Tick, symbol_gbpusd_fxcm: Symbol) {
        let other = Tick {
            symbol: symbol_gbpusd_fxcm,
            bid: dec!(1.30000),
            ask: dec!(1.30005),
            ..tick_audusd
        };
        assert_ne!(other, tick_audusd);
        assert_eq!(hash_of(&other), hash_of(&tick_audusd));
    }

    #[rstest]
    fn test_json_round_trip(tick_audusd: Tick) {
        let bytes = tick_audusd.to_json_bytes().unwrap();
        assert_eq!(Tick::from_json_bytes(&bytes).unwrap(), tick_audusd);
    }

    #[rstest]
    #[case(r#"{"symbol":"AUDUSD.FXCM","bid":"0","ask":"1.1","timestamp":1}"#, "bid")]
    #[case(r#"{"symbol":"AUDUSD.FXCM","bid":"1.0","ask":"-5","timestamp":1}"#, "ask")]
    fn test_json_decoding_rejects_non_positive_price(#[case] json: &str, #[case] label: &str) {
        let err = Tick::from_json_bytes(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains(&format!("'{label}' not positive")), "{err}");
    }

    #[rstest]
    fn test_display_with_timestamp_beyond_datetime_range(symbol_audusd_fxcm: Symbol) {
        let tick = Tick::new(symbol_audusd_fxcm, dec!(1.0), dec!(1.1), UnixNanos::new(u64::MAX));
        assert_eq!(tick.to_string(), format!("1.0,1.1,{}", u64::MAX));
    }

    #[rstest]
    fn test_msgpack_round_trip(tick_audusd: Tick) {
        let bytes = tick_audusd.to_msgpack_bytes().unwrap();
        let decoded = Tick::from_msgpack_bytes(&bytes).unwrap();
        assert_eq!(decoded, tick_audusd);
        assert_eq!(decoded.to_string(), tick_audusd.to_string());
    }
}
