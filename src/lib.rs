pub mod about;
pub mod app;
pub mod chain;
pub mod error;
pub mod logging;
pub mod ui;

pub use error::{AboutError, AboutResult};
