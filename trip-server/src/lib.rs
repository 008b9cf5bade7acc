//! Trip planner server.
//!
//! Finds trip offers between two airports, optionally sorted by cost or
//! duration, and lets a user keep a list of saved trips.

pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod sorting;
pub mod store;
pub mod upstream;
pub mod use_cases;
pub mod validate;
pub mod web;

#[cfg(test)]
mod testing;
