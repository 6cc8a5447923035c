//! # dhll-core
//!
//! Core types and pure logic for the Default Human Logic Layer client.
//!
//! This crate provides the foundational pieces shared by every other dhll crate:
//! - Rating, policy-mode and creative-mode enums
//! - Entity structs for enhancement results, policy decisions and audit entries
//! - The response normalizer that canonicalizes heterogeneous `/enhance` replies
//! - The policy resolver with its fallback ladder
//! - The parental-control PIN checksum
//! - Option catalogs and circumstance auto-detection
//! - Wire request/response types for the enhancement service
//!
//! Nothing here performs I/O.

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod normalize;
pub mod pin;
pub mod policy;
pub mod wire;
