use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::Role;

declare_id!("BB1JtUxXtmDnb6L5qXUSfuvT18TggYuSLBzfmjoYFnb4");

#[program]
pub mod vesting_ledger {
    use super::*;

    /// Create the ledger singleton and its vault for a fixed `pool_total`.
    pub fn initialize_ledger(ctx: Context<InitializeLedger>, pool_total: u64) -> Result<()> {
        instructions::initialize_ledger(ctx, pool_total)
    }

    /// Fund the vault from the admin's token account, up to the pool total.
    pub fn deposit_pool(ctx: Context<DepositPool>, amount: u64) -> Result<()> {
        instructions::deposit_pool(ctx, amount)
    }

    /// Admin-only: create a vesting record for `wallet`, earmarking its
    /// role-determined share of the pool. No tokens move.
    pub fn register_beneficiary(
        ctx: Context<RegisterBeneficiary>,
        wallet: Pubkey,
        cliff_seconds: u64,
        duration_seconds: u64,
        role: Role,
    ) -> Result<()> {
        instructions::register_beneficiary(ctx, wallet, cliff_seconds, duration_seconds, role)
    }

    /// Transfer the caller's newly unlocked balance out of the vault.
    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release(ctx)
    }

    /// Emit a releasable-amount quote for `wallet` at the current clock.
    pub fn emit_release_quote(ctx: Context<EmitReleaseQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_release_quote(ctx, wallet)
    }
}
