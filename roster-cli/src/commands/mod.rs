//! Command implementations for the roster CLI

pub mod serve;
