use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::LedgerError;
use crate::state::{Beneficiary, LedgerState};
use crate::utils::vesting;

pub fn release(ctx: Context<Release>) -> Result<()> {
    // Capture AccountInfo/bump before taking mutable borrows.
    let ledger_state_ai = ctx.accounts.ledger_state.to_account_info();
    let ledger_state_bump = ctx.bumps.ledger_state;

    let st = &mut ctx.accounts.ledger_state;
    let b = &mut ctx.accounts.beneficiary;
    require_keys_eq!(
        b.wallet,
        ctx.accounts.caller.key(),
        LedgerError::NotRegistered
    );

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, LedgerError::InvalidTokenMint);
    require_keys_eq!(ctx.accounts.vault.mint, st.mint, LedgerError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.caller_token_account.mint,
        st.mint,
        LedgerError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.caller_token_account.owner,
        ctx.accounts.caller.key(),
        LedgerError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let releasable = vesting::releasable_amount(
        b.total_allocated,
        b.released,
        b.registered_at,
        b.cliff_seconds,
        b.duration_seconds,
        now,
    )?;
    require!(releasable > 0, LedgerError::NothingToRelease);
    require!(
        ctx.accounts.vault.amount >= releasable,
        LedgerError::InsufficientVaultBalance
    );

    // The CPI and the registry update commit or abort together with the
    // enclosing transaction.
    let signer_seeds: &[&[&[u8]]] = &[&[b"ledger_state", &[ledger_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.caller_token_account.to_account_info(),
                authority: ledger_state_ai,
            },
            signer_seeds,
        ),
        releasable,
    )?;

    b.released = b
        .released
        .checked_add(releasable)
        .ok_or(LedgerError::MathOverflow)?;
    st.released_total = st
        .released_total
        .checked_add(releasable)
        .ok_or(LedgerError::MathOverflow)?;

    emit!(TokensReleased {
        wallet: b.wallet,
        amount: releasable,
        total_allocated: b.total_allocated,
        released: b.released,
        at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(mut, seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [b"beneficiary", ledger_state.key().as_ref(), caller.key().as_ref()],
        bump
    )]
    pub beneficiary: Account<'info, Beneficiary>,

    #[account(
        mut,
        seeds = [b"vault", ledger_state.key().as_ref()],
        bump,
        constraint = vault.mint == ledger_state.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub caller_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub wallet: Pubkey,
    pub amount: u64,
    pub total_allocated: u64,
    pub released: u64,
    pub at: i64,
}
