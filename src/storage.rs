//! Storage key definitions for the profile registry contract.

use soroban_sdk::{contracttype, Address};

/// Storage keys for the profile registry contract.
///
/// This enum defines all persistent storage keys used by the contract.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RegistryKey {
    /// Maps identity Address to ProfileRecord struct.
    /// Primary storage for profile data.
    Record(Address),
}

/// Time-to-live for profile data in ledger entries.
pub const RECORD_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const RECORD_TTL_EXTEND: u32 = 2592000; // ~150 days
