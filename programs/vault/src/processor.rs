//! Validation and balance arithmetic for the three vault operations.
//!
//! Nothing in here touches an account. Each operation checks every
//! precondition and returns the movement the caller must perform; the
//! instruction handlers carry it out through the System Program and the
//! runtime discards the whole transaction on any error.

use anchor_lang::prelude::*;

use crate::constants::VAULT_SPACE;
use crate::environment::Environment;
use crate::error::VaultError;
use crate::state::{verify_vault_address, VaultSnapshot};

/// Account creation planned by [`initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultCreation {
    pub lamports: u64,
    pub space: u64,
    pub bump: u8,
}

/// Lamport movement planned by [`deposit`] or [`withdraw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceChange {
    pub amount: u64,
    pub bump: u8,
    pub balance_before: u64,
    pub balance_after: u64,
}

pub fn initialize(env: &Environment, owner: &Pubkey, vault: &VaultSnapshot) -> Result<VaultCreation> {
    let bump = verify_vault_address(owner, &env.program_id, &vault.address)?;
    require!(env.authority == *owner, VaultError::Unauthorized);
    require!(!vault.exists(), VaultError::AlreadyInitialized);

    Ok(VaultCreation {
        lamports: env.minimum_balance(VAULT_SPACE),
        space: VAULT_SPACE as u64,
        bump,
    })
}

pub fn deposit(
    env: &Environment,
    owner: &Pubkey,
    vault: &VaultSnapshot,
    amount: u64,
) -> Result<BalanceChange> {
    let bump = authorize(env, owner, vault)?;
    require!(amount > 0, VaultError::InvalidAmount);

    let balance_after = vault
        .lamports
        .checked_add(amount)
        .ok_or(VaultError::ArithmeticOverflow)?;

    Ok(BalanceChange {
        amount,
        bump,
        balance_before: vault.lamports,
        balance_after,
    })
}

pub fn withdraw(
    env: &Environment,
    owner: &Pubkey,
    vault: &VaultSnapshot,
    amount: u64,
) -> Result<BalanceChange> {
    let bump = authorize(env, owner, vault)?;
    require!(amount > 0, VaultError::InvalidAmount);
    require!(env.withdrawals_open(), VaultError::WithdrawalClosed);

    let balance_after = vault
        .lamports
        .checked_sub(amount)
        .ok_or(VaultError::InsufficientBalance)?;
    require!(
        balance_after >= env.minimum_balance(vault.data_len),
        VaultError::RentExemptionBreach
    );

    Ok(BalanceChange {
        amount,
        bump,
        balance_before: vault.lamports,
        balance_after,
    })
}

/// Lamports that can leave the vault without breaching its floor.
pub fn withdrawable(env: &Environment, vault: &VaultSnapshot) -> u64 {
    vault
        .lamports
        .saturating_sub(env.minimum_balance(vault.data_len))
}

// Shared guard for the Active-state operations.
fn authorize(env: &Environment, owner: &Pubkey, vault: &VaultSnapshot) -> Result<u8> {
    let bump = verify_vault_address(owner, &env.program_id, &vault.address)?;
    require!(env.authority == *owner, VaultError::Unauthorized);
    require!(vault.is_active(), VaultError::VaultNotInitialized);
    Ok(bump)
}
