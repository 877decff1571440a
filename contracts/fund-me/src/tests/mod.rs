//! Test modules for the crowdfunding ledger contract.
