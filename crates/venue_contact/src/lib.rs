// --- File: crates/venue_contact/src/lib.rs ---
pub mod doc;
pub mod handlers;
#[cfg(test)]
mod handlers_test;
pub mod logic;
pub mod routes;
pub mod sink;
