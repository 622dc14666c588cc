//! Event emission helpers for the profile registry contract.
//!
//! Events are published to the host's append-only event log and are
//! fire-and-forget: delivery is an observer concern and never affects
//! the state change that produced the event.

use soroban_sdk::{Address, Env, String, Symbol};

/// Emit an event when an identity registers.
pub fn emit_user_registered(env: &Env, identity: &Address, name: &String, timestamp: u64) {
    let topics = (Symbol::new(env, "user_registered"),);
    env.events()
        .publish(topics, (identity.clone(), name.clone(), timestamp));
}

/// Emit an event when a registered identity updates its profile fields.
pub fn emit_profile_updated(env: &Env, identity: &Address, name: &String, age: u64, email: &String) {
    let topics = (Symbol::new(env, "profile_updated"),);
    env.events()
        .publish(topics, (identity.clone(), name.clone(), age, email.clone()));
}
