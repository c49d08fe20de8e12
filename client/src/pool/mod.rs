mod create;
mod cycle;
mod join;
mod read;

pub use create::*;
pub use cycle::*;
pub use join::*;
pub use read::*;
