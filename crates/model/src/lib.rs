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

//! Domain model for the Talon trading system.
//!
//! The `talon-model` crate provides immutable, precondition-validated value objects for market
//! data alongside an event sourced brokerage account:
//!
//! - Enumerations for venues, resolutions, quote types, security types, currencies and brokers.
//! - Identifiers, including the venue qualified [`identifiers::Symbol`].
//! - Market data: [`data::Tick`], [`data::BarType`], [`data::Bar`] and [`data::DataBar`].
//! - Instrument definitions: [`instrument::Instrument`].
//! - Account events and the [`account::Account`] they are applied to.
//!
//! Validated types follow the `new_checked` / `new` convention: `new_checked` returns a
//! [`talon_core::CorrectnessResult`], while `new` panics on invalid input.
//!
//! # Feature flags
//!
//! - `stubs`: Enables type stubs (rstest fixtures) for use in downstream test suites.

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod account;
pub mod data;
pub mod enums;
pub mod events;
pub mod identifiers;
pub mod instrument;
