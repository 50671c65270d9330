pub mod advisory;
pub mod risk;
pub mod session;
pub mod weather;

pub use advisory::*;
pub use risk::*;
pub use session::*;
pub use weather::*;
