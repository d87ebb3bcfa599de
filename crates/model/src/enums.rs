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

//! Enumerations for the trading domain model.
//!
//! Every enumeration renders to, and parses from (case-insensitively), its canonical
//! `SCREAMING_SNAKE_CASE` string.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Implements the canonical string projection for an enumeration.
macro_rules! impl_enum_as_str {
    ($ty:ty) => {
        impl $ty {
            /// Returns the canonical string for this value.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                (*self).into()
            }
        }
    };
}

/// The trading venue (market or exchange) for a financial market instrument.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    IntoStaticStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Venue {
    Alpari = 1,
    Dukascopy = 2,
    Fxcm = 3,
    Globex = 4,
    IdealPro = 5,
    Lmax = 6,
    Nyse = 7,
}

/// The time resolution of a bar series.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    IntoStaticStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    /// Bars built from a number of ticks.
    Tick = 1,
    Second = 2,
    Minute = 3,
    Hour = 4,
    Day = 5,
}

/// The quote side a bar series is built from.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    IntoStaticStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteType {
    /// The best bid price.
    Bid = 1,
    /// The best ask price.
    Ask = 2,
    /// The mid point between the best bid and ask.
    Mid = 3,
    /// The last traded price.
    Last = 4,
}

/// The security type of a tradeable contract.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    IntoStaticStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityType {
    Forex = 1,
    Bond = 2,
    Equity = 3,
    Future = 4,
    /// A contract for difference.
    Cfd = 5,
    Option = 6,
}

/// An ISO 4217 currency code (including precious metals quoted as currencies).
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    IntoStaticStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrencyCode {
    Aud = 1,
    Cad = 2,
    Chf = 3,
    Cnh = 4,
    Cny = 5,
    Czk = 6,
    Eur = 7,
    Gbp = 8,
    Hkd = 9,
    Jpy = 10,
    Mxn = 11,
    Nok = 12,
    Nzd = 13,
    Pln = 14,
    Rub = 15,
    Sar = 16,
    Sek = 17,
    Sgd = 18,
    Thb = 19,
    Try = 20,
    Usd = 21,
    /// Silver (troy ounce).
    Xag = 22,
    /// Gold (troy ounce).
    Xau = 23,
    Zar = 24,
}

/// The brokerage an account is held with.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    IntoStaticStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Broker {
    /// A simulated broker for backtesting and paper trading.
    Simulated = 1,
    Dukascopy = 2,
    Fxcm = 3,
    InteractiveBrokers = 4,
    Lmax = 5,
}

impl_enum_as_str!(Venue);
impl_enum_as_str!(Resolution);
impl_enum_as_str!(QuoteType);
impl_enum_as_str!(SecurityType);
impl_enum_as_str!(CurrencyCode);
impl_enum_as_str!(Broker);
