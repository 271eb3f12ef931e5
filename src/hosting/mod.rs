mod bridge;
mod config;
mod server;

pub use bridge::*;
pub use config::*;
pub use server::*;
