//! Grailify
//!
//! Domain rules for the Grailify marketplace: display price resolution,
//! catalog query normalisation and pagination, inventory labels and catalog
//! fixtures. Persistence lives in the `grailify-app` crate.

pub mod catalog;
pub mod fixtures;
pub mod inventory;
pub mod prelude;
pub mod prices;
pub mod pricing;
