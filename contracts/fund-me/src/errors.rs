//! Error definitions for the crowdfunding contract.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    InvalidAmount = 4,
    InvalidPrice = 5,
    InsufficientContribution = 6,
    InsufficientBalance = 7,
    IndexOutOfRange = 8,
    TransferFailed = 9,
    Overflow = 10,
}
