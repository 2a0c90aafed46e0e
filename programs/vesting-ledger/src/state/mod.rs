pub mod beneficiary;
pub mod ledger_state;

pub use beneficiary::*;
pub use ledger_state::*;
