// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod record;
pub mod sample;
pub mod query;
pub mod fetch;
pub mod filter;
pub mod aggregate;

pub mod csv;
pub mod file;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;
