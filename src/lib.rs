#![allow(unused_assignments)] // thiserror/miette proc macros trigger false positives

pub mod config;
pub mod driver;
pub mod error;
pub mod identity;
pub mod logging;
pub mod registry;
pub mod state;
pub mod translate;

pub use driver::{Driver, SystemInventory};
pub use error::RedfinError;
pub use state::{BootDevice, PowerAction, PowerState};
