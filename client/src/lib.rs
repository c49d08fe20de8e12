pub mod error;
pub mod provider;
pub mod session;
pub mod program;
pub mod pool;
pub mod vault;
pub mod utils;

pub use error::*;
pub use provider::*;
pub use session::*;
pub use program::*;
pub use pool::*;
pub use vault::*;
pub use utils::*;
