//! Profile record struct and related types.

use soroban_sdk::{contracttype, Env, String};

/// Per-identity profile state.
///
/// One record exists (conceptually) for every possible identity: an
/// identity that never registered reads as [`ProfileRecord::unregistered`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileRecord {
    /// Free-form name (any UTF-8 string, no uniqueness constraint).
    pub name: String,

    /// Age in years. Not range-validated.
    pub age: u64,

    /// Email address. Format is not validated.
    pub email: String,

    /// Ledger timestamp of registration. Set once, never modified.
    pub registered_at: u64,

    /// True after the first successful registration. Never reset.
    pub is_registered: bool,
}

impl ProfileRecord {
    /// Create a freshly registered record.
    pub fn new(name: String, age: u64, email: String, registered_at: u64) -> Self {
        Self {
            name,
            age,
            email,
            registered_at,
            is_registered: true,
        }
    }

    /// The default record an identity holds before it ever registers:
    /// empty strings, zero age, zero timestamp, flag unset.
    pub fn unregistered(env: &Env) -> Self {
        Self {
            name: String::from_str(env, ""),
            age: 0,
            email: String::from_str(env, ""),
            registered_at: 0,
            is_registered: false,
        }
    }
}
