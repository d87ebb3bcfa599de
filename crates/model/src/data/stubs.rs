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

//! Fixture functions to provide stub market data for testing.

use rstest::fixture;
use rust_decimal_macros::dec;
use talon_core::UnixNanos;

use crate::{
    data::{Bar, BarType, DataBar, Tick},
    enums::{QuoteType, Resolution},
    identifiers::{Symbol, stubs::symbol_audusd_fxcm},
};

/// 2018-01-01T12:00:00Z
pub const TS_2018_01_01_NOON: UnixNanos = UnixNanos::new(1_514_808_000_000_000_000);

#[fixture]
pub fn tick_audusd(#[from(symbol_audusd_fxcm)] symbol: Symbol) -> Tick {
    Tick::new(symbol, dec!(1.00000), dec!(1.00010), TS_2018_01_01_NOON)
}

#[fixture]
pub fn bartype_audusd_1min_bid(#[from(symbol_audusd_fxcm)] symbol: Symbol) -> BarType {
    BarType::new(symbol, 1, Resolution::Minute, QuoteType::Bid)
}

#[fixture]
pub fn bar_audusd() -> Bar {
    Bar::new(
        dec!(1.00001),
        dec!(1.00004),
        dec!(1.00000),
        dec!(1.00003),
        100_000,
        TS_2018_01_01_NOON,
    )
}

#[fixture]
pub fn data_bar_audusd() -> DataBar {
    DataBar::new(1.00001, 1.00004, 1.0, 1.00003, 100_000.0, TS_2018_01_01_NOON)
}
