// --- File: crates/venue_availability/src/lib.rs ---
// Declare modules within this crate
pub mod calendar;
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod registry;
pub mod routes;
