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

//! Fixture functions to provide stub identifiers for testing.

use rstest::fixture;

use crate::{
    enums::{Broker, Venue},
    identifiers::{AccountId, AccountNumber, Symbol},
};

// ---- AccountNumber ----

#[fixture]
pub fn account_number_fxcm() -> AccountNumber {
    AccountNumber::from("02851908")
}

// ---- AccountId ----

#[fixture]
pub fn account_id_fxcm(account_number_fxcm: AccountNumber) -> AccountId {
    AccountId::from_parts(Broker::Fxcm, &account_number_fxcm)
}

// ---- Symbol ----

#[fixture]
pub fn symbol_audusd_fxcm() -> Symbol {
    Symbol::new("AUDUSD", Venue::Fxcm)
}

#[fixture]
pub fn symbol_gbpusd_fxcm() -> Symbol {
    Symbol::new("GBPUSD", Venue::Fxcm)
}
