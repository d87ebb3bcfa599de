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
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use talon_core::{UUID4, UnixNanos};
use ustr::Ustr;

use crate::{
    enums::{Broker, CurrencyCode},
    events::AccountEvent,
    identifiers::{
        AccountId, AccountNumber,
        stubs::{account_id_fxcm, account_number_fxcm},
    },
};

#[fixture]
pub fn uuid4() -> UUID4 {
    UUID4::from("16578139-a945-4b65-b46c-bc131a15d8e7")
}

#[fixture]
pub fn account_event_fxcm(
    #[from(account_id_fxcm)] account_id: AccountId,
    #[from(account_number_fxcm)] account_number: AccountNumber,
    uuid4: UUID4,
) -> AccountEvent {
    AccountEvent::new(
        account_id,
        Broker::Fxcm,
        account_number,
        CurrencyCode::Usd,
        dec!(100000),
        dec!(100000),
        dec!(100000),
        dec!(0),
        dec!(0),
        dec!(0),
        dec!(0),
        Ustr::from("N"),
        uuid4,
        UnixNanos::new(1_514_808_000_000_000_000),
    )
}

/// Returns an FXCM account event with the given cash balance, as of `timestamp`.
///
/// Each call generates a new event ID.
#[must_use]
pub fn account_event_with_cash(cash_balance: Decimal, timestamp: u64) -> AccountEvent {
    AccountEvent::new(
        account_id_fxcm(account_number_fxcm()),
        Broker::Fxcm,
        account_number_fxcm(),
        CurrencyCode::Usd,
        cash_balance,
        cash_balance,
        dec!(100000),
        cash_balance - dec!(100000),
        dec!(0),
        dec!(0),
        dec!(0),
        Ustr::from("N"),
        UUID4::new(),
        UnixNanos::new(timestamp),
    )
}
