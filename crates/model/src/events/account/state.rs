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

use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use talon_core::{UUID4, UnixNanos, serialization::Serializable};
use ustr::Ustr;

use crate::{
    enums::{Broker, CurrencyCode},
    identifiers::{AccountId, AccountNumber},
};

/// Represents an event which includes information on the state of a brokerage account.
///
/// Contents are reported by the broker and are not validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountEvent {
    /// The account ID associated with the event.
    pub account_id: AccountId,
    /// The broker the account is held with.
    pub broker: Broker,
    /// The account number assigned by the broker.
    pub account_number: AccountNumber,
    /// The account currency.
    pub currency: CurrencyCode,
    /// The equity free for trading.
    pub free_equity: Decimal,
    /// The cash balance of the account.
    pub cash_balance: Decimal,
    /// The cash balance at the start of the trading day.
    pub cash_start_day: Decimal,
    /// The cash activity since the start of the trading day.
    pub cash_activity_day: Decimal,
    /// The margin used before liquidation.
    pub margin_used_liquidation: Decimal,
    /// The margin used for maintenance.
    pub margin_used_maintenance: Decimal,
    /// The margin ratio.
    pub margin_ratio: Decimal,
    /// The margin call status, as reported by the broker.
    pub margin_call_status: Ustr,
    /// The unique identifier for the event.
    pub event_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the event occurred.
    pub timestamp: UnixNanos,
}

impl AccountEvent {
    /// Creates a new [`AccountEvent`] instance.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        account_id: AccountId,
        broker: Broker,
        account_number: AccountNumber,
        currency: CurrencyCode,
        free_equity: Decimal,
        cash_balance: Decimal,
        cash_start_day: Decimal,
        cash_activity_day: Decimal,
        margin_used_liquidation: Decimal,
        margin_used_maintenance: Decimal,
        margin_ratio: Decimal,
        margin_call_status: Ustr,
        event_id: UUID4,
        timestamp: UnixNanos,
    ) -> Self {
        Self {
            account_id,
            broker,
            account_number,
            currency,
            free_equity,
            cash_balance,
            cash_start_day,
            cash_activity_day,
            margin_used_liquidation,
            margin_used_maintenance,
            margin_ratio,
            margin_call_status,
            event_id,
            timestamp,
        }
    }
}

impl Display for AccountEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(account_id={}, broker={}, account_number={}, currency={}, free_equity={}, \
            cash_balance={}, margin_ratio={}, margin_call_status={}, event_id={})",
            stringify!(AccountEvent),
            self.account_id,
            self.broker,
            self.account_number,
            self.currency,
            self.free_equity,
            self.cash_balance,
            self.margin_ratio,
            self.margin_call_status,
            self.event_id,
        )
    }
}

impl PartialEq for AccountEvent {
    fn eq(&self, other: &Self) -> bool {
        self.event_id == other.event_id
    }
}

impl Eq for AccountEvent {}

impl Serializable for AccountEvent {}
