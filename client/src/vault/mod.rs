mod connect;
mod dashboard;
mod deposit;
mod withdraw;

pub use connect::*;
pub use dashboard::*;
pub use deposit::*;
pub use withdraw::*;
