//! Hosting Server Binary
//!
//! Runs the HTTP server for connect-four rooms.
//! Clients play over the `/ws` WebSocket.

use clap::Parser;
use connect4::hosting::Config;
use connect4::hosting::Server;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    connect4::log(config.verbosity)?;
    Server::run(config).await
}
