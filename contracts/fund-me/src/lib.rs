//! Crowdfunding ledger contract: USD-minimum contributions priced through an
//! external feed, owner-only withdrawal.
#![no_std]

pub mod contract;
pub mod errors;
pub mod price_feed;
pub mod types;

#[cfg(test)]
mod tests;
