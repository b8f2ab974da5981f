//! Optval - Optional values with a default payload
//!
//! This crate provides [`Optional`], a small value type representing either the
//! presence of a `T` or its absence. It is intended as a building block for
//! larger systems: configuration fields, lookup results and nullable struct
//! members, where the "value plus validity flag" pattern would otherwise be
//! spread across two fields.
//!
//! An empty `Optional` still stores `T::default()` in its payload slot, so
//! every read is total. No operation in this crate can fail or panic.
//!
//! `Optional` is a plain value with no internal synchronisation. Mutating a
//! shared instance from several threads requires an external lock.
//!
//! # Features
//!
//! * `std` - link the standard library and enable `tracing/std`. Without it
//!   the crate is `no_std` and only depends on `core`. The API is identical
//!   in both modes; the feature only decides what gets linked.
//!
//! The `std` feature is enabled by default.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(warnings)]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

pub mod optional;
pub use optional::Optional;
