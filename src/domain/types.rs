//! Core domain types for the admissions engine

use serde::Serialize;

/// Newtype wrapper for exhibit handles to provide type safety
///
/// Handles are assigned by the museum in catalogue order and stay stable
/// for its lifetime (the catalogue is append-only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(transparent)]
pub struct ExhibitId(pub usize);

impl std::fmt::Display for ExhibitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Newtype wrapper for patron handles to provide type safety
///
/// Assigned in admission order; the roster is append-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(transparent)]
pub struct PatronId(pub usize);

impl std::fmt::Display for PatronId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named attraction with a fixed admission cost
///
/// Immutable after construction. `cost` is in whole currency units;
/// `0` marks a free exhibit, which is never charged for.
#[derive(Debug, Clone, Serialize)]
pub struct Exhibit {
    name: String,
    cost: u64,
}

impl Exhibit {
    pub fn new(name: impl Into<String>, cost: u64) -> Self {
        Self { name: name.into(), cost }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.cost == 0
    }
}

/// A visitor with a spending balance and declared interests
///
/// Interests are exhibit names, kept in declaration order for listing;
/// matching against a catalogue is existence-based, so duplicate
/// declarations are harmless. The balance only ever decreases, and only
/// through the admission flow.
#[derive(Debug, Clone, Serialize)]
pub struct Patron {
    name: String,
    spending_money: u64,
    interests: Vec<String>,
}

impl Patron {
    pub fn new(name: impl Into<String>, spending_money: u64) -> Self {
        Self { name: name.into(), spending_money, interests: Vec::new() }
    }

    /// Declare interest in an exhibit by name.
    ///
    /// The name is not validated against any catalogue; interests may
    /// name exhibits no museum offers.
    pub fn add_interest(&mut self, exhibit_name: impl Into<String>) {
        self.interests.push(exhibit_name.into());
    }

    pub fn is_interested_in(&self, exhibit_name: &str) -> bool {
        self.interests.iter().any(|interest| interest == exhibit_name)
    }

    /// Deduct `amount` from the balance.
    ///
    /// Admission flow only; callers confirm `spending_money >= amount`
    /// first, so the balance never underflows.
    pub(crate) fn charge(&mut self, amount: u64) {
        debug_assert!(amount <= self.spending_money);
        self.spending_money -= amount;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn spending_money(&self) -> u64 {
        self.spending_money
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }
}
