//! The closed drink catalog.
//!
//! Six kinds, each with an immutable (prep minutes, price) pair.  This is
//! configuration data rather than policy: the scorer only ever sees the
//! summed prep time of an order.

use std::fmt;
use std::str::FromStr;

use crate::CafeError;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DrinkKind {
    ColdBrew,
    Espresso,
    Americano,
    Cappuccino,
    Latte,
    SpecialtyMocha,
}

impl DrinkKind {
    /// Every kind, in catalog order.  Workload weights are indexed the same way.
    pub const ALL: [DrinkKind; 6] = [
        DrinkKind::ColdBrew,
        DrinkKind::Espresso,
        DrinkKind::Americano,
        DrinkKind::Cappuccino,
        DrinkKind::Latte,
        DrinkKind::SpecialtyMocha,
    ];

    #[inline]
    pub const fn prep_minutes(self) -> u32 {
        match self {
            DrinkKind::ColdBrew       => 1,
            DrinkKind::Espresso       => 2,
            DrinkKind::Americano      => 2,
            DrinkKind::Cappuccino     => 4,
            DrinkKind::Latte          => 4,
            DrinkKind::SpecialtyMocha => 6,
        }
    }

    #[inline]
    pub const fn price_rupees(self) -> u32 {
        match self {
            DrinkKind::ColdBrew       => 120,
            DrinkKind::Espresso       => 150,
            DrinkKind::Americano      => 140,
            DrinkKind::Cappuccino     => 180,
            DrinkKind::Latte          => 200,
            DrinkKind::SpecialtyMocha => 250,
        }
    }

    /// Wire identifier, e.g. `"COLD_BREW"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            DrinkKind::ColdBrew       => "COLD_BREW",
            DrinkKind::Espresso       => "ESPRESSO",
            DrinkKind::Americano      => "AMERICANO",
            DrinkKind::Cappuccino     => "CAPPUCCINO",
            DrinkKind::Latte          => "LATTE",
            DrinkKind::SpecialtyMocha => "SPECIALTY_MOCHA",
        }
    }
}

impl fmt::Display for DrinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrinkKind {
    type Err = CafeError;

    /// Case-insensitive match on the wire identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DrinkKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CafeError::UnknownDrink(s.to_owned()))
    }
}

/// Parse a list of drink identifiers, rejecting the whole list on the first
/// unknown name.  No partial list is ever returned.
pub fn parse_drinks<S: AsRef<str>>(names: &[S]) -> Result<Vec<DrinkKind>, CafeError> {
    names.iter().map(|n| n.as_ref().parse()).collect()
}
