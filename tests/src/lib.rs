//! Shared fixtures for the primecurve integration suites

pub mod fixtures;
