//! Currency Config

use clap::Args;
use grailify::fixtures::find_currency;
use rusty_money::iso::Currency;

/// Currency every stored price is denominated in.
#[derive(Debug, Args)]
pub struct CurrencyConfig {
    /// ISO currency code of stored prices (GBP, USD, EUR)
    #[arg(long, env = "CURRENCY", default_value = "USD")]
    pub currency: String,
}

impl CurrencyConfig {
    /// Resolve the configured currency code.
    ///
    /// # Errors
    ///
    /// Returns the code back when it is not a supported currency.
    pub fn currency(&self) -> Result<&'static Currency, String> {
        find_currency(&self.currency).ok_or_else(|| self.currency.clone())
    }
}
