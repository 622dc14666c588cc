//! # Soroban Profile Registry
//!
//! Identity-keyed user profile registry for the Soroban blockchain ecosystem.
//!
//! Each identity (a Soroban [`Address`]) may register exactly once and from
//! then on update its profile fields in place. The per-identity state machine
//! is deliberately small:
//!
//! - Unregistered → Registered, via `register` (at most once)
//! - Registered is absorbing: `update_profile` operates within it
//!
//! Identities that never registered still read as a default record, so no
//! pre-initialization step exists and no record is ever deleted.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Register a profile (once per identity)
//! client.register(&caller, &name, &age, &email);
//!
//! // Update fields after registration
//! client.update_profile(&caller, &name, &age, &email);
//!
//! // Read back
//! let record = client.get_profile(&caller);
//! let registered = client.check_registration_status(&identity);
//! ```

#![no_std]

mod events;
mod profile;
mod storage;

pub use profile::ProfileRecord;
pub use storage::RegistryKey;

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};

use crate::events::*;
use crate::storage::{RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD};

/// Error codes for the profile registry contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    /// Caller has already registered; `register` is a once-only operation.
    AlreadyRegistered = 1,
    /// Caller has not registered; `update_profile` requires registration.
    NotRegistered = 2,
}

impl From<RegistryError> for soroban_sdk::Error {
    fn from(e: RegistryError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

#[contract]
pub struct ProfileRegistryContract;

#[contractimpl]
impl ProfileRegistryContract {
    // ========== Registration ==========

    /// Register the caller's profile.
    ///
    /// # Arguments
    /// * `caller` - Identity registering; must authorize the invocation
    /// * `name` - Free-form name
    /// * `age` - Age in years, not range-validated
    /// * `email` - Email address, format not validated
    ///
    /// # Panics
    /// - If the caller has already registered
    pub fn register(env: Env, caller: Address, name: String, age: u64, email: String) {
        caller.require_auth();

        // At most one registration per identity
        if Self::read_record(&env, &caller).is_registered {
            panic_with_error!(&env, RegistryError::AlreadyRegistered);
        }

        let timestamp = env.ledger().timestamp();
        let record = ProfileRecord::new(name.clone(), age, email, timestamp);

        env.storage()
            .persistent()
            .set(&RegistryKey::Record(caller.clone()), &record);

        env.storage().persistent().extend_ttl(
            &RegistryKey::Record(caller.clone()),
            RECORD_TTL_THRESHOLD,
            RECORD_TTL_EXTEND,
        );

        emit_user_registered(&env, &caller, &name, timestamp);
    }

    // ========== Profile Updates ==========

    /// Overwrite the caller's profile fields.
    ///
    /// `registered_at` and the registration flag are left untouched; only
    /// `name`, `age` and `email` change.
    ///
    /// # Panics
    /// - If the caller has never registered
    pub fn update_profile(env: Env, caller: Address, name: String, age: u64, email: String) {
        caller.require_auth();

        let mut record = Self::read_record(&env, &caller);
        if !record.is_registered {
            panic_with_error!(&env, RegistryError::NotRegistered);
        }

        record.name = name.clone();
        record.age = age;
        record.email = email.clone();

        env.storage()
            .persistent()
            .set(&RegistryKey::Record(caller.clone()), &record);

        env.storage().persistent().extend_ttl(
            &RegistryKey::Record(caller.clone()),
            RECORD_TTL_THRESHOLD,
            RECORD_TTL_EXTEND,
        );

        emit_profile_updated(&env, &caller, &name, age, &email);
    }

    // ========== Queries ==========

    /// Get the caller's own profile record.
    ///
    /// Never fails: an identity that has not registered reads as the
    /// default record with `is_registered = false`.
    pub fn get_profile(env: Env, caller: Address) -> ProfileRecord {
        Self::read_record(&env, &caller)
    }

    /// Check whether an arbitrary identity has registered.
    ///
    /// Exposes only the registration flag, never the full profile.
    pub fn check_registration_status(env: Env, identity: Address) -> bool {
        Self::read_record(&env, &identity).is_registered
    }

    /// Read the raw record of an arbitrary identity.
    ///
    /// This is the open read surface over the registry mapping; absent
    /// identities read as the default record.
    pub fn get_record(env: Env, identity: Address) -> ProfileRecord {
        Self::read_record(&env, &identity)
    }

    // ========== Internal Helpers ==========

    /// Read a record, materializing the default for absent identities.
    fn read_record(env: &Env, identity: &Address) -> ProfileRecord {
        env.storage()
            .persistent()
            .get(&RegistryKey::Record(identity.clone()))
            .unwrap_or_else(|| ProfileRecord::unregistered(env))
    }
}
