use anchor_lang::prelude::*;

use crate::constants::{VAULT_SEED, VAULT_SPACE};
use crate::error::VaultError;

/// Canonical vault address for `owner`: `[b"vault", owner]` under `program_id`.
pub fn find_vault_address(owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, owner.as_ref()], program_id)
}

/// Re-derive the vault address and compare it with the one the caller
/// supplied. Returns the canonical bump on success.
pub fn verify_vault_address(owner: &Pubkey, program_id: &Pubkey, supplied: &Pubkey) -> Result<u8> {
    let (expected, bump) = find_vault_address(owner, program_id);
    require!(expected == *supplied, VaultError::AddressMismatch);
    Ok(bump)
}

/// Read-only view of the account presented as a vault.
///
/// A vault holds no data: its balance is the account's lamports and its
/// owner is bound by the address derivation. An Active vault is therefore
/// a System-owned, zero-length account with a non-zero balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultSnapshot {
    pub address: Pubkey,
    pub lamports: u64,
    pub data_len: usize,
    pub program_owner: Pubkey,
}

impl VaultSnapshot {
    pub fn new(address: Pubkey, lamports: u64, data_len: usize, program_owner: Pubkey) -> Self {
        Self {
            address,
            lamports,
            data_len,
            program_owner,
        }
    }

    /// An address nothing has been written to yet.
    pub fn empty(address: Pubkey) -> Self {
        Self::new(address, 0, 0, System::id())
    }

    /// A live vault holding `lamports`.
    pub fn active(address: Pubkey, lamports: u64) -> Self {
        Self::new(address, lamports, VAULT_SPACE, System::id())
    }

    pub fn from_account_info(info: &AccountInfo) -> Self {
        Self::new(*info.key, info.lamports(), info.data_len(), *info.owner)
    }

    /// Any lamports, data, or non-system owner means the address is taken.
    pub fn exists(&self) -> bool {
        self.lamports > 0 || self.data_len > 0 || self.program_owner != System::id()
    }

    /// Shape check only. The rent floor depends on the `Rent` sysvar, so
    /// invariant `lamports >= floor` is enforced by the processor: initialize
    /// funds exactly the floor, deposit only adds, and withdraw refuses to
    /// cross it. A vault found below the floor can still be topped up but
    /// never drained further.
    pub fn is_active(&self) -> bool {
        self.lamports > 0 && self.data_len == VAULT_SPACE && self.program_owner == System::id()
    }
}
