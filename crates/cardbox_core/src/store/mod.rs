//! Card collection store.
//!
//! # Responsibility
//! - Own the in-memory card collection and every mutation path over it.
//! - Mirror each mutation to the storage adapter before returning.
//!
//! # Invariants
//! - No other component mutates the collection; all changes flow through
//!   `CardStore` operations.
//! - Card ids issued by the store strictly increase.

pub mod card_store;
