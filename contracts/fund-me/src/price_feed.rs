//! Price feed interface and USD conversion.
//!
//! The feed is an external contract reached through the generated client, so
//! tests can register a deterministic stand-in under the same interface.

use soroban_sdk::{contractclient, Env};

use crate::errors::ContractError;
use crate::types::PriceData;

/// Interface the bound price feed contract must implement.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Returns the current asset/USD quote.
    fn latest_round_data(env: Env) -> PriceData;
}

/// Converts `amount` (7-decimal asset units) to its USD value at the quoted
/// rate, keeping the 7-decimal scale of the amount.
pub fn usd_value(amount: i128, quote: &PriceData) -> Result<i128, ContractError> {
    if quote.price <= 0 {
        return Err(ContractError::InvalidPrice);
    }

    let scale = 10i128
        .checked_pow(quote.decimals)
        .ok_or(ContractError::Overflow)?;
    let scaled = amount
        .checked_mul(quote.price)
        .ok_or(ContractError::Overflow)?;

    Ok(scaled / scale)
}
