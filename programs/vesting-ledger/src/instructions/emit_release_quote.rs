use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::{Beneficiary, LedgerState};
use crate::utils::vesting;

/// Read-only quote for a wallet: unlocked, released and releasable amounts at
/// the current clock, surfaced as an event for off-chain consumers.
pub fn emit_release_quote(ctx: Context<EmitReleaseQuote>, wallet: Pubkey) -> Result<()> {
    let b = &ctx.accounts.beneficiary;
    require_keys_eq!(b.wallet, wallet, LedgerError::NotRegistered);

    let now = Clock::get()?.unix_timestamp;
    let unlocked = vesting::unlocked_amount(
        b.total_allocated,
        b.registered_at,
        b.cliff_seconds,
        b.duration_seconds,
        now,
    )?;
    let releasable = unlocked
        .checked_sub(b.released)
        .ok_or(LedgerError::MathOverflow)?;

    emit!(ReleaseQuote {
        wallet,
        unlocked,
        released: b.released,
        releasable,
        at: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct EmitReleaseQuote<'info> {
    #[account(seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        seeds = [b"beneficiary", ledger_state.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub beneficiary: Account<'info, Beneficiary>,
}

#[event]
pub struct ReleaseQuote {
    pub wallet: Pubkey,
    pub unlocked: u64,
    pub released: u64,
    pub releasable: u64,
    pub at: i64,
}
