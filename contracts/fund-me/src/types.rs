//! Type definitions for the crowdfunding contract.

use soroban_sdk::{contracttype, Address};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Balance(Address),
    Owner,
    PriceFeed,
    Funders,              // Vec<Address> in first-contribution order
    AmountFunded(Address), // Cumulative contribution per funder
}

/// A price quote as returned by the feed contract
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PriceData {
    pub price: i128,   // Asset price in USD, scaled by 10^decimals
    pub decimals: u32, // Decimal places of the price value
}
