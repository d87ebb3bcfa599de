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

//! An event sourced brokerage account.
//!
//! An [`Account`] starts out empty and is brought up to date by applying the stream of
//! [`AccountEvent`]s reported by its broker, in arrival order.

use rust_decimal::Decimal;
use strum::{AsRefStr, Display};
use talon_core::UnixNanos;
use ustr::Ustr;

use crate::{
    enums::{Broker, CurrencyCode},
    events::AccountEvent,
    identifiers::{AccountId, AccountNumber},
};

/// The lifecycle status of an [`Account`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    /// No event has been applied, so the account has no identity.
    #[default]
    Uninitialized,
    /// The identity has been taken from the first applied event.
    Initialized,
}

/// Represents a brokerage account, reconstructed by applying account events.
///
/// The identity (ID, broker, account number and currency) is taken from the first applied
/// event and is fixed thereafter. Balances and margins always reflect the latest event.
#[derive(Clone, Debug, Default)]
pub struct Account {
    status: AccountStatus,
    id: Option<AccountId>,
    broker: Option<Broker>,
    account_number: Option<AccountNumber>,
    currency: Option<CurrencyCode>,
    free_equity: Decimal,
    cash_balance: Decimal,
    cash_start_day: Decimal,
    cash_activity_day: Decimal,
    margin_used_liquidation: Decimal,
    margin_used_maintenance: Decimal,
    margin_ratio: Decimal,
    margin_call_status: Option<Ustr>,
    last_updated: Option<UnixNanos>,
    events: Vec<AccountEvent>,
}

impl Account {
    /// Creates a new uninitialized [`Account`] instance with zero balances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the given event to the account.
    ///
    /// The first event applied initializes the account identity. Every event then
    /// overwrites the balances and margins and is appended to the event log.
    ///
    /// Event contents are trusted as reported, no validation is performed.
    pub fn apply(&mut self, event: AccountEvent) {
        if self.status == AccountStatus::Uninitialized {
            self.initialize(&event);
        }

        self.fold(&event);

        log::debug!("Applied {event}");
        self.events.push(event);
    }

    fn initialize(&mut self, event: &AccountEvent) {
        self.id = Some(event.account_id);
        self.broker = Some(event.broker);
        self.account_number = Some(event.account_number);
        self.currency = Some(event.currency);
        self.status = AccountStatus::Initialized;

        log::info!(
            "Initialized account {} ({} {})",
            event.account_id,
            event.broker,
            event.currency
        );
    }

    fn fold(&mut self, event: &AccountEvent) {
        self.free_equity = event.free_equity;
        self.cash_balance = event.cash_balance;
        self.cash_start_day = event.cash_start_day;
        self.cash_activity_day = event.cash_activity_day;
        self.margin_used_liquidation = event.margin_used_liquidation;
        self.margin_used_maintenance = event.margin_used_maintenance;
        self.margin_ratio = event.margin_ratio;
        self.margin_call_status = Some(event.margin_call_status);
        self.last_updated = Some(event.timestamp);
    }

    #[must_use]
    pub fn status(&self) -> AccountStatus {
        self.status
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.status == AccountStatus::Initialized
    }

    /// Returns the account ID, if initialized.
    #[must_use]
    pub fn id(&self) -> Option<AccountId> {
        self.id
    }

    /// Returns the broker the account is held with, if initialized.
    #[must_use]
    pub fn broker(&self) -> Option<Broker> {
        self.broker
    }

    /// Returns the broker assigned account number, if initialized.
    #[must_use]
    pub fn account_number(&self) -> Option<AccountNumber> {
        self.account_number
    }

    /// Returns the account currency, if initialized.
    #[must_use]
    pub fn currency(&self) -> Option<CurrencyCode> {
        self.currency
    }

    #[must_use]
    pub fn free_equity(&self) -> Decimal {
        self.free_equity
    }

    #[must_use]
    pub fn cash_balance(&self) -> Decimal {
        self.cash_balance
    }

    #[must_use]
    pub fn cash_start_day(&self) -> Decimal {
        self.cash_start_day
    }

    #[must_use]
    pub fn cash_activity_day(&self) -> Decimal {
        self.cash_activity_day
    }

    #[must_use]
    pub fn margin_used_liquidation(&self) -> Decimal {
        self.margin_used_liquidation
    }

    #[must_use]
    pub fn margin_used_maintenance(&self) -> Decimal {
        self.margin_used_maintenance
    }

    #[must_use]
    pub fn margin_ratio(&self) -> Decimal {
        self.margin_ratio
    }

    /// Returns the latest margin call status reported by the broker, if any.
    #[must_use]
    pub fn margin_call_status(&self) -> Option<Ustr> {
        self.margin_call_status
    }

    /// Returns the number of events applied to the account.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Returns the most recently applied event, if any.
    #[must_use]
    pub fn last_event(&self) -> Option<&AccountEvent> {
        self.events.last()
    }

    /// Returns the timestamp of the most recently applied event, if any.
    #[must_use]
    pub fn last_updated(&self) -> Option<UnixNanos> {
        self.last_updated
    }

    /// Returns a copy of the applied events, in application order.
    #[must_use]
    pub fn events(&self) -> Vec<AccountEvent> {
        self.events.clone()
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "{}(id={id}, status={})", stringify!(Account), self.status),
            None => write!(f, "{}(id=None, status={})", stringify!(Account), self.status),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::events::account::stubs::*;

    #[rstest]
    fn test_new_account_is_uninitialized() {
        let account = Account::new();
        assert_eq!(account.status(), AccountStatus::Uninitialized);
        assert!(!account.is_initialized());
        assert_eq!(account.id(), None);
        assert_eq!(account.broker(), None);
        assert_eq!(account.account_number(), None);
        assert_eq!(account.currency(), None);
        assert_eq!(account.cash_balance(), Decimal::ZERO);
        assert_eq!(account.free_equity(), Decimal::ZERO);
        assert_eq!(account.margin_call_status(), None);
        assert_eq!(account.event_count(), 0);
        assert!(account.last_event().is_none());
        assert!(account.last_updated().is_none());
        assert!(account.events().is_empty());
        assert_eq!(account.to_string(), "Account(id=None, status=UNINITIALIZED)");
    }

    #[rstest]
    fn test_apply_first_event_initializes(account_event_fxcm: AccountEvent) {
        let mut account = Account::new();
        account.apply(account_event_fxcm.clone());

        assert!(account.is_initialized());
        assert_eq!(account.id(), Some(AccountId::from("FXCM-02851908")));
        assert_eq!(account.broker(), Some(Broker::Fxcm));
        assert_eq!(account.account_number(), Some(AccountNumber::from("02851908")));
        assert_eq!(account.currency(), Some(CurrencyCode::Usd));
        assert_eq!(account.free_equity(), dec!(100000));
        assert_eq!(account.cash_balance(), dec!(100000));
        assert_eq!(account.cash_start_day(), dec!(100000));
        assert_eq!(account.margin_call_status(), Some(Ustr::from("N")));
        assert_eq!(account.event_count(), 1);
        assert_eq!(account.last_event(), Some(&account_event_fxcm));
        assert_eq!(account.last_updated(), Some(account_event_fxcm.timestamp));
        assert_eq!(account.to_string(), "Account(id=FXCM-02851908, status=INITIALIZED)");
    }

    #[rstest]
    fn test_apply_subsequent_events_update_balances() {
        let event1 = account_event_with_cash(dec!(100000), 1_000);
        let event2 = AccountEvent {
            free_equity: dec!(98000.25),
            cash_start_day: dec!(100500),
            cash_activity_day: dec!(-999.50),
            margin_used_liquidation: dec!(1500),
            margin_used_maintenance: dec!(750),
            margin_ratio: dec!(0.015),
            margin_call_status: Ustr::from("W"),
            ..account_event_with_cash(dec!(99500.50), 2_000)
        };

        let mut account = Account::new();
        account.apply(event1.clone());
        account.apply(event2.clone());

        assert_eq!(account.event_count(), 2);
        assert_eq!(account.free_equity(), dec!(98000.25));
        assert_eq!(account.cash_balance(), dec!(99500.50));
        assert_eq!(account.cash_start_day(), dec!(100500));
        assert_eq!(account.cash_activity_day(), dec!(-999.50));
        assert_eq!(account.margin_used_liquidation(), dec!(1500));
        assert_eq!(account.margin_used_maintenance(), dec!(750));
        assert_eq!(account.margin_ratio(), dec!(0.015));
        assert_eq!(account.margin_call_status(), Some(Ustr::from("W")));
        assert_eq!(account.last_event(), Some(&event2));
        assert_eq!(account.last_updated(), Some(UnixNanos::from(2_000)));
        assert_eq!(account.events(), vec![event1, event2]);
    }

    #[rstest]
    fn test_identity_is_fixed_by_first_event(account_event_fxcm: AccountEvent) {
        let mut account = Account::new();
        account.apply(account_event_fxcm.clone());

        let other = AccountEvent {
            account_id: AccountId::from("LMAX-1234"),
            broker: Broker::Lmax,
            account_number: AccountNumber::from("1234"),
            currency: CurrencyCode::Gbp,
            cash_balance: dec!(5),
            event_id: talon_core::UUID4::new(),
            ..account_event_fxcm
        };
        account.apply(other);

        assert_eq!(account.id(), Some(AccountId::from("FXCM-02851908")));
        assert_eq!(account.broker(), Some(Broker::Fxcm));
        assert_eq!(account.currency(), Some(CurrencyCode::Usd));
        assert_eq!(account.cash_balance(), dec!(5));
        assert_eq!(account.event_count(), 2);
    }

    #[rstest]
    fn test_apply_accepts_negative_balances() {
        let mut account = Account::new();
        account.apply(account_event_with_cash(dec!(-250), 1_000));
        assert_eq!(account.cash_balance(), dec!(-250));
        assert_eq!(account.free_equity(), dec!(-250));
    }

    #[rstest]
    fn test_events_returns_independent_copy() {
        let mut account = Account::new();
        account.apply(account_event_with_cash(dec!(100000), 1_000));

        let mut events = account.events();
        events.clear();

        assert_eq!(account.event_count(), 1);
        assert_eq!(account.events().len(), 1);
    }
}
