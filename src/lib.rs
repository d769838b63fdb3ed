pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod tags;
pub mod ui;

pub use error::{Result, TagBumpError};
