#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

pub mod account;
mod bank;
pub mod primitives;

pub use bank::*;
pub use primitives::*;
