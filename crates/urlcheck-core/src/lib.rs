pub mod clock;
pub mod config;
pub mod history;
pub mod logging;
pub mod session;
pub mod storage;
pub mod validator;

pub use validator::{classify, normalize};
