use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::LedgerError;
use crate::state::{Beneficiary, LedgerState, Role};
use crate::utils::vesting;

pub fn register_beneficiary(
    ctx: Context<RegisterBeneficiary>,
    wallet: Pubkey,
    cliff_seconds: u64,
    duration_seconds: u64,
    role: Role,
) -> Result<()> {
    let st = &mut ctx.accounts.ledger_state;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        LedgerError::UnauthorizedAdmin
    );
    require!(wallet != Pubkey::default(), LedgerError::InvalidPubkey);
    require!(duration_seconds > 0, LedgerError::InvalidConfig);

    // Allocations are earmarked against real balance: the vault must be fully
    // funded before the first registration.
    if st.beneficiary_count == 0 {
        require!(
            ctx.accounts.vault.amount == st.pool_total,
            LedgerError::VaultNotFunded
        );
    }

    let total_allocated = vesting::allocation_for_role(role, st.pool_total)?;
    require!(total_allocated > 0, LedgerError::InvalidConfig);
    require!(
        total_allocated <= st.unallocated,
        LedgerError::InsufficientPool
    );

    let now = Clock::get()?.unix_timestamp;

    let b = &mut ctx.accounts.beneficiary;
    b.wallet = wallet;
    b.role = role;
    b.total_allocated = total_allocated;
    b.released = 0;
    b.cliff_seconds = cliff_seconds;
    b.duration_seconds = duration_seconds;
    b.registered_at = now;

    st.unallocated = st
        .unallocated
        .checked_sub(total_allocated)
        .ok_or(LedgerError::MathOverflow)?;
    st.beneficiary_count = st
        .beneficiary_count
        .checked_add(1)
        .ok_or(LedgerError::MathOverflow)?;

    emit!(BeneficiaryRegistered {
        wallet,
        role,
        total_allocated,
        cliff_seconds,
        duration_seconds,
        registered_at: now,
        unallocated: st.unallocated,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct RegisterBeneficiary<'info> {
    #[account(mut, seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    // `init` rejects a second registration of the same wallet: the record is
    // create-once, its schedule fields immutable afterwards.
    #[account(
        init,
        payer = admin,
        space = 8 + Beneficiary::SIZE,
        seeds = [b"beneficiary", ledger_state.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub beneficiary: Account<'info, Beneficiary>,

    #[account(
        seeds = [b"vault", ledger_state.key().as_ref()],
        bump,
        constraint = vault.mint == ledger_state.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct BeneficiaryRegistered {
    pub wallet: Pubkey,
    pub role: Role,
    pub total_allocated: u64,
    pub cliff_seconds: u64,
    pub duration_seconds: u64,
    pub registered_at: i64,
    pub unallocated: u64,
}
