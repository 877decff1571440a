//! Core contract implementation for the crowdfunding ledger.

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Vec};

use crate::errors::ContractError;
use crate::price_feed::{usd_value, PriceFeedClient};
use crate::types::DataKey;

/// Minimum accepted contribution, in USD at the 7-decimal ledger scale (50 USD)
pub const MINIMUM_USD: i128 = 50_0000000;

#[contract]
pub struct FundMeContract;

#[contractimpl]
impl FundMeContract {
    /// Initializes the contract with the owner and price feed addresses (one-time only)
    pub fn initialize(env: Env, owner: Address, price_feed: Address) -> Result<(), ContractError> {
        owner.require_auth();

        if env.storage().persistent().has(&DataKey::Owner) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().persistent().set(&DataKey::Owner, &owner);
        env.storage().persistent().set(&DataKey::PriceFeed, &price_feed);

        Ok(())
    }

    /// Contributes `amount` to the ledger
    ///
    /// The amount is converted to USD through the bound price feed and must be
    /// worth at least [`MINIMUM_USD`]. First-time funders are appended to the
    /// funders sequence; repeat contributions accumulate on the existing record.
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), ContractError> {
        funder.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let feed: Address = env
            .storage()
            .persistent()
            .get(&DataKey::PriceFeed)
            .ok_or(ContractError::NotInitialized)?;

        let quote = PriceFeedClient::new(&env, &feed).latest_round_data();
        if usd_value(amount, &quote)? < MINIMUM_USD {
            return Err(ContractError::InsufficientContribution);
        }

        let funder_balance = Self::balance(env.clone(), funder.clone());
        if funder_balance < amount {
            return Err(ContractError::InsufficientBalance);
        }

        // Move the contribution into the contract's held balance
        let new_funder_balance = funder_balance
            .checked_sub(amount)
            .ok_or(ContractError::Overflow)?;
        Self::_set_balance(&env, funder.clone(), new_funder_balance);

        let contract_address = env.current_contract_address();
        let held = Self::balance(env.clone(), contract_address.clone());
        let new_held = held.checked_add(amount).ok_or(ContractError::Overflow)?;
        Self::_set_balance(&env, contract_address, new_held);

        // Record the contribution; append to the funders sequence on first fund only
        let record_key = DataKey::AmountFunded(funder.clone());
        if !env.storage().persistent().has(&record_key) {
            let mut funders = Self::_funders(&env);
            funders.push_back(funder.clone());
            env.storage().persistent().set(&DataKey::Funders, &funders);
        }

        let funded: i128 = env.storage().persistent().get(&record_key).unwrap_or(0);
        let new_funded = funded.checked_add(amount).ok_or(ContractError::Overflow)?;
        env.storage().persistent().set(&record_key, &new_funded);

        #[allow(deprecated)]
        env.events().publish(
            (symbol_short!("fund"), symbol_short!("recorded")),
            (funder, amount),
        );

        Ok(())
    }

    /// Returns the cumulative amount contributed by `funder` (0 if unknown)
    pub fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        let key = DataKey::AmountFunded(funder);
        env.storage().persistent().get(&key).unwrap_or(0)
    }

    /// Returns the funder at `index` in first-contribution order
    pub fn get_funders(env: Env, index: u32) -> Result<Address, ContractError> {
        Self::_funders(&env)
            .get(index)
            .ok_or(ContractError::IndexOutOfRange)
    }

    pub fn get_owner(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Owner)
    }

    pub fn get_price_feed(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::PriceFeed)
    }

    /// Drains the held balance to the owner and clears the ledger (owner only)
    pub fn withdraw(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::_drain(&env, caller, false)
    }

    /// Same state transition as [`withdraw`](Self::withdraw), but snapshots the
    /// funders sequence into a local once instead of re-reading storage per index
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::_drain(&env, caller, true)
    }

    /// Shared withdrawal routine; `cache_funders` selects the read strategy
    /// and nothing else, so both entry points stay observably equivalent
    fn _drain(env: &Env, caller: Address, cache_funders: bool) -> Result<(), ContractError> {
        caller.require_auth();

        let owner: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Owner)
            .ok_or(ContractError::NotInitialized)?;

        if caller != owner {
            return Err(ContractError::NotOwner);
        }

        // Reset every funder's record
        if cache_funders {
            let funders = Self::_funders(env);
            for funder in funders.iter() {
                env.storage()
                    .persistent()
                    .remove(&DataKey::AmountFunded(funder));
            }
        } else {
            let count = Self::_funders(env).len();
            for i in 0..count {
                if let Some(funder) = Self::_funders(env).get(i) {
                    env.storage()
                        .persistent()
                        .remove(&DataKey::AmountFunded(funder));
                }
            }
        }

        env.storage().persistent().remove(&DataKey::Funders);

        // Transfer the full held balance to the owner. A rejected credit fails
        // the invocation, and the host rolls back the resets above with it.
        let contract_address = env.current_contract_address();
        let held = Self::balance(env.clone(), contract_address.clone());

        if held > 0 {
            let owner_balance = Self::balance(env.clone(), owner.clone());
            let new_owner_balance = owner_balance
                .checked_add(held)
                .ok_or(ContractError::TransferFailed)?;
            Self::_set_balance(env, owner.clone(), new_owner_balance);
            Self::_set_balance(env, contract_address, 0);
        }

        #[allow(deprecated)]
        env.events().publish(
            (symbol_short!("withdraw"), symbol_short!("drained")),
            (owner, held),
        );

        Ok(())
    }

    /// Mints 1000 units for new users (one-time only)
    pub fn mint_initial(env: Env, user: Address) -> i128 {
        user.require_auth();

        let key = DataKey::Balance(user.clone());

        if let Some(existing_balance) = env.storage().persistent().get(&key) {
            return existing_balance;
        }

        let initial_amount: i128 = 1000_0000000;
        env.storage().persistent().set(&key, &initial_amount);

        initial_amount
    }

    /// Returns the environment balance held by `user` (the contract's own
    /// address gives the held balance of the ledger)
    pub fn balance(env: Env, user: Address) -> i128 {
        let key = DataKey::Balance(user);
        env.storage().persistent().get(&key).unwrap_or(0)
    }

    pub(crate) fn _set_balance(env: &Env, user: Address, amount: i128) {
        let key = DataKey::Balance(user);
        env.storage().persistent().set(&key, &amount);
    }

    pub(crate) fn _funders(env: &Env) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Funders)
            .unwrap_or(Vec::new(env))
    }
}
