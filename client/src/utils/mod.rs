mod account;
mod asset;
mod rpc;

pub use account::*;
pub use asset::*;
pub use rpc::*;
