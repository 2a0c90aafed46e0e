pub mod deposit_pool;
pub mod emit_release_quote;
pub mod initialize_ledger;
pub mod register_beneficiary;
pub mod release;

pub use deposit_pool::*;
pub use emit_release_quote::*;
pub use initialize_ledger::*;
pub use register_beneficiary::*;
pub use release::*;
