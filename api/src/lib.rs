pub mod consts;
pub mod error;
mod macros;
pub mod instruction;
pub mod pda;
pub mod sdk;
pub mod state;
pub mod utils;

pub use crate::consts::*;

pub mod prelude {
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::instruction::*;
    pub use crate::pda::*;
    pub use crate::sdk::*;
    pub use crate::state::*;
    pub use crate::utils::*;
}

use steel::*;

declare_id!("E8PktsP4T29ZCiAXyjuvUNtGYvUnd93p6ofTLVYWdkEa");
