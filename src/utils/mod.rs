pub mod error;
pub mod fsops;
pub mod logger;
pub mod validation;
