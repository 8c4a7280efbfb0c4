//! Line chat client - Entry Point
//!
//! Connects to a newline-delimited chat server and relays lines between the
//! terminal and the connection.
//!
//! Usage: `line-chat-client [host] [port]`

use log::{error, info};
use tokio::io::BufReader;

use line_chat_client::console::Console;
use line_chat_client::{ClientConfig, run_with};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match ClientConfig::load(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    info!("Launching chat client for {}...", config.endpoint());

    let outcome = run_with(&config, Console::stdio(), BufReader::new(tokio::io::stdin())).await;

    // Exit explicitly: a stdin read may still be parked on the blocking pool.
    std::process::exit(outcome.exit_code());
}
