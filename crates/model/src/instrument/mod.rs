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

//! Instrument definitions for the trading domain model.

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use talon_core::{
    UnixNanos,
    correctness::{
        CorrectnessError, CorrectnessResult, FAILED, check_non_negative_decimal, check_non_negative_i64,
        check_positive_decimal, check_positive_i64, check_valid_string,
    },
    serialization::Serializable,
};
use ustr::Ustr;

use crate::{
    enums::{CurrencyCode, SecurityType},
    identifiers::Symbol,
};

/// Represents a tradeable financial market instrument, as specified by its broker.
///
/// Instances are immutable once constructed and are replaced wholesale on broker updates.
/// Equality and hashing use the `symbol` only, so an updated definition compares equal to
/// the one it replaces.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "InstrumentFields")]
pub struct Instrument {
    /// The instrument symbol.
    pub symbol: Symbol,
    /// The native symbol for the instrument, as assigned by the broker.
    pub broker_symbol: Ustr,
    /// The currency the instrument is quoted in.
    pub quote_currency: CurrencyCode,
    /// The security type of the instrument.
    pub security_type: SecurityType,
    /// The decimal precision of the instrument price.
    pub tick_precision: u8,
    /// The minimum price increment.
    pub tick_size: Decimal,
    /// The value in the quote currency of one tick movement per contract.
    pub tick_value: Decimal,
    /// The target spread between bid and ask, in points.
    pub target_direct_spread_points: Decimal,
    /// The number of units in one contract.
    pub contract_size: i64,
    /// The minimum distance in points for stop entry orders.
    pub min_stop_distance_entry: i64,
    /// The minimum distance in points for limit entry orders.
    pub min_limit_distance_entry: i64,
    /// The minimum distance in points for stop orders.
    pub min_stop_distance: i64,
    /// The minimum distance in points for limit orders.
    pub min_limit_distance: i64,
    /// The minimum tradeable order size.
    pub min_trade_size: i64,
    /// The maximum tradeable order size.
    pub max_trade_size: i64,
    /// The margin requirement per contract.
    pub margin_requirement: Decimal,
    /// The rollover interest rate for long positions, may be negative.
    pub rollover_interest_buy: Decimal,
    /// The rollover interest rate for short positions, may be negative.
    pub rollover_interest_sell: Decimal,
    /// UNIX timestamp (nanoseconds) when the definition was last updated by the broker.
    pub timestamp: UnixNanos,
}

impl Instrument {
    /// Creates a new [`Instrument`] instance with correctness checking.
    ///
    /// Checks are evaluated in argument order, returning the first failure.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `broker_symbol` is not a valid string.
    /// - `tick_size`, `tick_value`, `contract_size`, `min_trade_size` or `max_trade_size`
    ///   is not positive (> 0).
    /// - `target_direct_spread_points`, any minimum order distance, or `margin_requirement`
    ///   is negative.
    #[allow(clippy::too_many_arguments)]
    pub fn new_checked(
        symbol: Symbol,
        broker_symbol: Ustr,
        quote_currency: CurrencyCode,
        security_type: SecurityType,
        tick_precision: u8,
        tick_size: Decimal,
        tick_value: Decimal,
        target_direct_spread_points: Decimal,
        contract_size: i64,
        min_stop_distance_entry: i64,
        min_limit_distance_entry: i64,
        min_stop_distance: i64,
        min_limit_distance: i64,
        min_trade_size: i64,
        max_trade_size: i64,
        margin_requirement: Decimal,
        rollover_interest_buy: Decimal,
        rollover_interest_sell: Decimal,
        timestamp: UnixNanos,
    ) -> CorrectnessResult<Self> {
        check_valid_string(broker_symbol, stringify!(broker_symbol))?;
        check_positive_decimal(tick_size, stringify!(tick_size))?;
        check_positive_decimal(tick_value, stringify!(tick_value))?;
        check_non_negative_decimal(
            target_direct_spread_points,
            stringify!(target_direct_spread_points),
        )?;
        check_positive_i64(contract_size, stringify!(contract_size))?;
        check_non_negative_i64(min_stop_distance_entry, stringify!(min_stop_distance_entry))?;
        check_non_negative_i64(min_limit_distance_entry, stringify!(min_limit_distance_entry))?;
        check_non_negative_i64(min_stop_distance, stringify!(min_stop_distance))?;
        check_non_negative_i64(min_limit_distance, stringify!(min_limit_distance))?;
        check_positive_i64(min_trade_size, stringify!(min_trade_size))?;
        check_positive_i64(max_trade_size, stringify!(max_trade_size))?;
        check_non_negative_decimal(margin_requirement, stringify!(margin_requirement))?;

        Ok(Self {
            symbol,
            broker_symbol,
            quote_currency,
            security_type,
            tick_precision,
            tick_size,
            tick_value,
            target_direct_spread_points,
            contract_size,
            min_stop_distance_entry,
            min_limit_distance_entry,
            min_stop_distance,
            min_limit_distance,
            min_trade_size,
            max_trade_size,
            margin_requirement,
            rollover_interest_buy,
            rollover_interest_sell,
            timestamp,
        })
    }

    /// Creates a new [`Instrument`] instance.
    ///
    /// # Panics
    ///
    /// Panics if any of the [`Instrument::new_checked`] conditions fail.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: Symbol,
        broker_symbol: Ustr,
        quote_currency: CurrencyCode,
        security_type: SecurityType,
        tick_precision: u8,
        tick_size: Decimal,
        tick_value: Decimal,
        target_direct_spread_points: Decimal,
        contract_size: i64,
        min_stop_distance_entry: i64,
        min_limit_distance_entry: i64,
        min_stop_distance: i64,
        min_limit_distance: i64,
        min_trade_size: i64,
        max_trade_size: i64,
        margin_requirement: Decimal,
        rollover_interest_buy: Decimal,
        rollover_interest_sell: Decimal,
        timestamp: UnixNanos,
    ) -> Self {
        Self::new_checked(
            symbol,
            broker_symbol,
            quote_currency,
            security_type,
            tick_precision,
            tick_size,
            tick_value,
            target_direct_spread_points,
            contract_size,
            min_stop_distance_entry,
            min_limit_distance_entry,
            min_stop_distance,
            min_limit_distance,
            min_trade_size,
            max_trade_size,
            margin_requirement,
            rollover_interest_buy,
            rollover_interest_sell,
            timestamp,
        )
        .expect(FAILED)
    }
}

#[derive(Deserialize)]
struct InstrumentFields {
    symbol: Symbol,
    broker_symbol: Ustr,
    quote_currency: CurrencyCode,
    security_type: SecurityType,
    tick_precision: u8,
    tick_size: Decimal,
    tick_value: Decimal,
    target_direct_spread_points: Decimal,
    contract_size: i64,
    min_stop_distance_entry: i64,
    min_limit_distance_entry: i64,
    min_stop_distance: i64,
    min_limit_distance: i64,
    min_trade_size: i64,
    max_trade_size: i64,
    margin_requirement: Decimal,
    rollover_interest_buy: Decimal,
    rollover_interest_sell: Decimal,
    timestamp: UnixNanos,
}

impl TryFrom<InstrumentFields> for Instrument {
    type Error = CorrectnessError;

    fn try_from(f: InstrumentFields) -> Result<Self, Self::Error> {
        Self::new_checked(
            f.symbol,
            f.broker_symbol,
            f.quote_currency,
            f.security_type,
            f.tick_precision,
            f.tick_size,
            f.tick_value,
            f.target_direct_spread_points,
            f.contract_size,
            f.min_stop_distance_entry,
            f.min_limit_distance_entry,
            f.min_stop_distance,
            f.min_limit_distance,
            f.min_trade_size,
            f.max_trade_size,
            f.margin_requirement,
            f.rollover_interest_buy,
            f.rollover_interest_sell,
            f.timestamp,
        )
    }
}

impl PartialEq<Self> for Instrument {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Instrument {}

impl Hash for Instrument {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl Display for Instrument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(Instrument), self.symbol)
    }
}

impl Serializable for Instrument {}
