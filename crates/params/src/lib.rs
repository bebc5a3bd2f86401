//! Constant curve parameters for the primecurve library
//!
//! This crate holds nothing but data: the named-curve registry as
//! big-endian hex strings plus object identifiers. Parsing and validation
//! happen in `primecurve-algorithms`.

#![no_std]

pub mod secg;

pub use secg::{by_name, by_oid, CurveSpec, NAMES, REGISTRY};
