use anchor_lang::prelude::*;
use anchor_lang::system_program::{create_account, CreateAccount};

use crate::constants::VAULT_SEED;
use crate::environment::Environment;
use crate::processor;
use crate::state::VaultSnapshot;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for the vault and must be its owner
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: identity the vault address is derived from; must equal `authority`
    pub owner: UncheckedAccount<'info>,

    /// CHECK: re-derived from `owner` and checked for prior existence in the handler
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let env = Environment::load(ctx.program_id, &ctx.accounts.authority.key())?;
    let vault = VaultSnapshot::from_account_info(&ctx.accounts.vault.to_account_info());

    let creation = processor::initialize(&env, &owner, &vault)?;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, owner.as_ref(), &[creation.bump]]];

    create_account(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            CreateAccount {
                from: ctx.accounts.authority.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
            signer_seeds,
        ),
        creation.lamports,
        creation.space,
        &ctx.accounts.system_program.key(),
    )?;

    msg!("Vault {} initialized for owner {}", vault.address, owner);
    msg!("Rent-exempt balance: {}", creation.lamports);

    Ok(())
}
