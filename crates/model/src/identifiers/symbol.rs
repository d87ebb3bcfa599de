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

//! Represents a valid tradeable instrument symbol, the pairing of a code and a venue.

use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use talon_core::correctness::{CorrectnessResult, FAILED, check_valid_string};
use ustr::Ustr;

use crate::enums::Venue;

/// Represents a valid tradeable instrument symbol.
///
/// The code is normalized to uppercase on construction, so two symbols built from the same
/// code in different case on the same venue are equal and hash identically.
#[repr(C)]
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Symbol {
    code: Ustr,
    venue: Venue,
}

impl Symbol {
    /// Creates a new [`Symbol`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` is not a valid string.
    pub fn new_checked<T: AsRef<str>>(code: T, venue: Venue) -> CorrectnessResult<Self> {
        let code = code.as_ref();
        check_valid_string(code, stringify!(code))?;
        Ok(Self {
            code: Ustr::from(code.to_uppercase().as_str()),
            venue,
        })
    }

    /// Creates a new [`Symbol`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `code` is not a valid string.
    pub fn new<T: AsRef<str>>(code: T, venue: Venue) -> Self {
        Self::new_checked(code, venue).expect(FAILED)
    }

    /// Returns the uppercased symbol code.
    #[must_use]
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// Returns the venue the symbol trades on.
    #[must_use]
    pub fn venue(&self) -> Venue {
        self.venue
    }

    /// Returns the venue as its canonical string.
    #[must_use]
    pub fn venue_string(&self) -> &'static str {
        self.venue.as_str()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.code, self.venue)
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{self}')", stringify!(Symbol))
    }
}

impl FromStr for Symbol {
    type Err = anyhow::Error;

    /// Parses a symbol from its canonical `<CODE>.<VENUE>` form.
    ///
    /// The code may itself contain periods, the venue is taken after the last one.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (code, venue) = s.rsplit_once('.').ok_or_else(|| {
            anyhow::anyhow!("Error parsing `Symbol` from '{s}': missing '.' separator")
        })?;
        let venue = Venue::from_str(venue)
            .map_err(|e| anyhow::anyhow!("Error parsing `Symbol` from '{s}': {e}"))?;
        Ok(Self::new_checked(code, venue)?)
    }
}

impl From<&str> for Symbol {
    /// Creates a [`Symbol`] from its canonical string form.
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be parsed.
    fn from(value: &str) -> Self {
        Self::from_str(value).unwrap_or_else(|e| panic!("{FAILED}: {e}"))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::{
        collections::{HashSet, hash_map::DefaultHasher},
        hash::{Hash, Hasher},
    };

    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::identifiers::stubs::*;

    fn hash_of(symbol: &Symbol) -> u64 {
        let mut hasher = DefaultHasher::new();
        symbol.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_string_reprs(symbol_audusd_fxcm: Symbol) {
        assert_eq!(symbol_audusd_fxcm.code(), "AUDUSD");
        assert_eq!(symbol_audusd_fxcm.venue(), Venue::Fxcm);
        assert_eq!(symbol_audusd_fxcm.venue_string(), "FXCM");
        assert_eq!(symbol_audusd_fxcm.to_string(), "AUDUSD.FXCM");
        assert_eq!(format!("{symbol_audusd_fxcm:?}"), "Symbol('AUDUSD.FXCM')");
    }

    #[rstest]
    fn test_code_is_uppercased() {
        let symbol = Symbol::new("audusd", Venue::Fxcm);
        assert_eq!(symbol.code(), "AUDUSD");
        assert_eq!(symbol, Symbol::new("AUDUSD", Venue::Fxcm));
        assert_eq!(hash_of(&symbol), hash_of(&Symbol::new("AuDuSd", Venue::Fxcm)));
    }

    #[rstest]
    fn test_equality_includes_venue() {
        let fxcm = Symbol::new("AUDUSD", Venue::Fxcm);
        let lmax = Symbol::new("AUDUSD", Venue::Lmax);
        assert_ne!(fxcm, lmax);

        let set: HashSet<Symbol> = [fxcm, lmax, Symbol::new("audusd", Venue::Fxcm)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    fn test_new_checked_with_invalid_code(#[case] code: &str) {
        let err = Symbol::new_checked(code, Venue::Fxcm).unwrap_err();
        assert_eq!(err.label(), Some("code"));
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_new_with_invalid_code_panics() {
        let _ = Symbol::new("", Venue::Fxcm);
    }

    #[rstest]
    #[case("AUDUSD.FXCM", "AUDUSD", Venue::Fxcm)]
    #[case("audusd.fxcm", "AUDUSD", Venue::Fxcm)]
    #[case("BRK.B.NYSE", "BRK.B", Venue::Nyse)]
    #[case("ES.IDEAL_PRO", "ES", Venue::IdealPro)]
    fn test_from_str(#[case] input: &str, #[case] code: &str, #[case] venue: Venue) {
        let symbol = Symbol::from_str(input).unwrap();
        assert_eq!(symbol.code(), code);
        assert_eq!(symbol.venue(), venue);
    }

    #[rstest]
    #[case("AUDUSD")]
    #[case("AUDUSD.MOON")]
    #[case(".FXCM")]
    fn test_from_str_invalid(#[case] input: &str) {
        assert!(Symbol::from_str(input).is_err());
    }

    #[rstest]
    fn test_display_from_str_round_trip(symbol_audusd_fxcm: Symbol) {
        let rendered = symbol_audusd_fxcm.to_string();
        assert_eq!(Symbol::from_str(&rendered).unwrap(), symbol_audusd_fxcm);
        assert_eq!(symbol_audusd_fxcm.to_string(), rendered);
    }

    #[rstest]
    fn test_serde_round_trip(symbol_audusd_fxcm: Symbol) {
        let json = serde_json::to_string(&symbol_audusd_fxcm).unwrap();
        assert_eq!(json, "\"AUDUSD.FXCM\"");
        assert_eq!(serde_json::from_str::<Symbol>(&json).unwrap(), symbol_audusd_fxcm);
    }

    proptest! {
        #[test]
        fn prop_symbol_equality_ignores_code_case(code in "[a-zA-Z][a-zA-Z0-9/]{0,11}") {
            let symbol = Symbol::new(&code, Venue::Fxcm);
            prop_assert_eq!(symbol.code(), code.to_uppercase());
            prop_assert_eq!(symbol, Symbol::new(code.to_uppercase(), Venue::Fxcm));
            prop_assert_eq!(symbol, Symbol::new(code.to_lowercase(), Venue::Fxcm));
        }
    }
}
