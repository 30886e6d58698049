//! Grailify Domain Concerns

pub mod catalog;
pub mod inventory;
pub mod listings;
pub mod orders;
pub mod prices;
pub mod users;

mod columns;
