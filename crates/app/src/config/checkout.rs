//! Checkout Config

use clap::Args;

use crate::domain::orders::TotalPolicy;

/// Checkout settings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// How the declared order total is treated (trusted, verified)
    #[arg(long, env = "CHECKOUT_TOTAL_POLICY", value_enum, default_value_t = TotalPolicy::Trusted)]
    pub total_policy: TotalPolicy,
}
