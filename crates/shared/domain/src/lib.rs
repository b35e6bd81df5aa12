//! # Domain Models
//!
//! This crate contains pure bootstrap configuration types with a minimal
//! dependency surface (`serde` only). Keep it lean: no I/O, no process
//! handling, no heavy logic—just data and simple helpers.

pub mod config;
pub mod policy;
