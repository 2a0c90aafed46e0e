use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::LedgerError;
use crate::state::LedgerState;

pub fn initialize_ledger(ctx: Context<InitializeLedger>, pool_total: u64) -> Result<()> {
    require!(pool_total > 0, LedgerError::InvalidConfig);

    let st = &mut ctx.accounts.ledger_state;
    st.mint = ctx.accounts.mint.key();
    st.admin = ctx.accounts.admin.key();
    st.pool_total = pool_total;
    st.unallocated = pool_total;
    st.released_total = 0;
    st.beneficiary_count = 0;

    emit!(LedgerInitialized {
        mint: st.mint,
        admin: st.admin,
        pool_total: st.pool_total,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + LedgerState::SIZE,
        seeds = [b"ledger_state"],
        bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = ledger_state,
        seeds = [b"vault", ledger_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub pool_total: u64,
}
