//! Grailify application: persistence, services and configuration.

pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod errors;
pub mod ids;
pub mod observability;

#[cfg(test)]
mod test;
