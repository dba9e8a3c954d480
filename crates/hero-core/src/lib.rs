//! # hero-core
//!
//! Core types, in-memory hero table, and error types for Tour of Heroes.
//!
//! This crate provides the foundational types shared across all hero crates:
//! - The [`Hero`](entities::Hero) record and its create payload
//! - The in-memory [`HeroTable`](table::HeroTable) with data store semantics
//!   (id generation, substring search, upsert)
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod table;
