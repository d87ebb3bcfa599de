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

use rstest::fixture;
use rust_decimal_macros::dec;
use talon_core::UnixNanos;
use ustr::Ustr;

use super::Instrument;
use crate::{
    enums::{CurrencyCode, SecurityType},
    identifiers::{
        Symbol,
        stubs::{symbol_audusd_fxcm, symbol_gbpusd_fxcm},
    },
};

fn forex_instrument(symbol: Symbol, broker_symbol: &str) -> Instrument {
    Instrument::new(
        symbol,
        Ustr::from(broker_symbol),
        CurrencyCode::Usd,
        SecurityType::Forex,
        5,
        dec!(0.00001),
        dec!(0.01),
        dec!(1),
        1_000,
        1,
        1,
        1,
        1,
        1,
        50,
        dec!(0),
        dec!(0.1),
        dec!(-1.1),
        UnixNanos::new(1_514_808_000_000_000_000),
    )
}

#[fixture]
pub fn instrument_audusd_fxcm(#[from(symbol_audusd_fxcm)] symbol: Symbol) -> Instrument {
    forex_instrument(symbol, "AUD/USD")
}

#[fixture]
pub fn instrument_gbpusd_fxcm(#[from(symbol_gbpusd_fxcm)] symbol: Symbol) -> Instrument {
    forex_instrument(symbol, "GBP/USD")
}
