use anchor_lang::prelude::*;

/// Custom error codes for the vesting ledger program.
#[error_code]
pub enum LedgerError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Caller is not a registered beneficiary")]
    NotRegistered,

    #[msg("Allocation would exceed the remaining unallocated pool")]
    InsufficientPool,

    #[msg("Vault must hold the full pool before registration")]
    VaultNotFunded,

    #[msg("Deposit would exceed the pool total")]
    OverDeposit,

    #[msg("No newly unlocked balance to release")]
    NothingToRelease,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
