//! KaizenEdge onboarding core.
//!
//! Pure, synchronous derivations over a validated onboarding record:
//! schema validation, unlock-flag evaluation, dietary exclusions, scheduling
//! hints, and the workout/shopping plan builders. No I/O, no shared state —
//! callers may run these concurrently over independent records.

pub mod error;
pub mod exclusions;
pub mod onboarding;
pub mod schema;
pub mod scheduling;
pub mod shopping;
pub mod unlocks;
pub mod validator;
pub mod workouts;
