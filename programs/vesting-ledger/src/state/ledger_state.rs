use anchor_lang::prelude::*;

/// Singleton ledger state PDA: pool counters plus the admin identity.
#[account]
pub struct LedgerState {
    /// Token mint of the vested pool.
    pub mint: Pubkey,
    /// Admin authority, set once at initialization; sole identity allowed to
    /// register beneficiaries.
    pub admin: Pubkey,
    /// Fixed pool size, set once at initialization.
    pub pool_total: u64,
    /// Remaining unallocated pool; only ever decremented by registrations.
    pub unallocated: u64,
    /// Sum of all per-beneficiary released amounts.
    pub released_total: u64,
    /// Number of registered beneficiaries.
    pub beneficiary_count: u32,
}

impl LedgerState {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        8 +  // pool_total
        8 +  // unallocated
        8 +  // released_total
        4;   // beneficiary_count
}
