use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LedgerError;
use crate::state::LedgerState;

pub fn deposit_pool(ctx: Context<DepositPool>, amount: u64) -> Result<()> {
    require!(amount > 0, LedgerError::InvalidConfig);

    let st = &ctx.accounts.ledger_state;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        LedgerError::UnauthorizedAdmin
    );

    require_keys_eq!(ctx.accounts.vault.mint, st.mint, LedgerError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        st.mint,
        LedgerError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        LedgerError::InvalidTokenAccount
    );

    // Over-deposit protection: the vault never holds more than the pool.
    let post = (ctx.accounts.vault.amount as u128)
        .checked_add(amount as u128)
        .ok_or(LedgerError::MathOverflow)?;
    require!(post <= st.pool_total as u128, LedgerError::OverDeposit);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(PoolDeposited {
        admin: st.admin,
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositPool<'info> {
    #[account(seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [b"vault", ledger_state.key().as_ref()],
        bump,
        constraint = vault.mint == ledger_state.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct PoolDeposited {
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
