pub mod cli;

mod client;
pub use client::*;

mod error;
pub use error::*;

mod reddit;
pub use reddit::*;
