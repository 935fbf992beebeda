pub mod action_path;
pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod group_hint;
pub mod io;
pub mod paths;
mod separator;
pub mod store;
pub mod sync;
pub mod tree;

pub use error::{ModelError, Result};
