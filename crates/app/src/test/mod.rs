//! Test support

mod context;
mod helpers;

pub(crate) use context::TestContext;
