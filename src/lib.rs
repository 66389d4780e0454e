pub mod analyzers;
pub mod error;
pub mod input;
pub mod output;
pub mod parser;
pub mod session;
pub mod shell;
