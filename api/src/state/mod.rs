mod pool;
mod registry;
mod vault;

pub use pool::*;
pub use registry::*;
pub use vault::*;

use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum AccountType {
    Unknown = 0,
    Registry,
    Pool,
    Vault,
}
