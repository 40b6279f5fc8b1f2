use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::VAULT_SEED;
use crate::environment::Environment;
use crate::processor;
use crate::state::VaultSnapshot;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Receives the withdrawn lamports and must be the vault owner
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: identity the vault address is derived from; compared with `authority` in the handler
    pub owner: UncheckedAccount<'info>,

    /// CHECK: re-derived from `owner` in the handler
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// The vault is a System-owned PDA, so lamports leave it through a System
/// Program transfer signed with the vault seeds. The floor check happens in
/// the processor before any lamports move.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let env = Environment::load(ctx.program_id, &ctx.accounts.authority.key())?;
    let vault = VaultSnapshot::from_account_info(&ctx.accounts.vault.to_account_info());

    msg!(
        "Withdrawing {} of {} available lamports from vault {}",
        amount,
        processor::withdrawable(&env, &vault),
        vault.address
    );

    let change = processor::withdraw(&env, &owner, &vault, amount)?;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, owner.as_ref(), &[change.bump]]];

    transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.authority.to_account_info(),
            },
            signer_seeds,
        ),
        change.amount,
    )?;

    msg!("Vault balance: {} -> {}", change.balance_before, change.balance_after);

    Ok(())
}
