pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod ocr;
pub mod preview;
pub mod scanner;
pub mod snapshot;
pub mod workflow;
