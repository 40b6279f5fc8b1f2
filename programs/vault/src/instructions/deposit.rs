use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::environment::Environment;
use crate::processor;
use crate::state::VaultSnapshot;

#[derive(Accounts)]
pub struct Deposit<'info> {
    /// Funds the deposit and must be the vault owner
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: identity the vault address is derived from; compared with `authority` in the handler
    pub owner: UncheckedAccount<'info>,

    /// CHECK: re-derived from `owner` in the handler
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let env = Environment::load(ctx.program_id, &ctx.accounts.authority.key())?;
    let vault = VaultSnapshot::from_account_info(&ctx.accounts.vault.to_account_info());

    let change = processor::deposit(&env, &owner, &vault, amount)?;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.authority.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        change.amount,
    )?;

    msg!("Deposited {} lamports into vault {}", change.amount, vault.address);
    msg!("Vault balance: {} -> {}", change.balance_before, change.balance_after);

    Ok(())
}
