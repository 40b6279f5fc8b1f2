#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("Ct4gVR9ggiLraQKcZeNs2fkbtDtCSxowC9KjCDcnSDyC");

pub mod constants;
pub mod environment;
pub mod error;
pub mod instructions;
pub mod processor;
pub mod state;


pub use constants::*;
pub use error::VaultError;
pub use instructions::*;

#[program]
pub mod vault {
    use super::*;

    /// Create the owner's vault at its derived address, funded with exactly
    /// the rent-exempt minimum for a zero-length account.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Move `amount` lamports from the owner into the vault.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Move `amount` lamports from the vault back to the owner.
    /// Never leaves the vault below its rent-exempt floor.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }
}
