mod view;

use anyhow::Context;
use anyhow::Result;
use castanet_client::CastanetClient;
use castanet_client::ClientOptions;
use castanet_nav::NavSession;
use castanet_nav::Selection;
use clap::Parser;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;
use view::TerminalView;

/// Browse a Castanet taxonomy server from the terminal.
#[derive(Debug, Parser)]
#[command(name = "castanet", version)]
struct Cli {
    /// Base URL of the Castanet server.
    #[arg(long, env = "CASTANET_SERVER", default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    Pick(usize),
    Empty,
    Invalid,
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Command::Quit;
    }
    match trimmed.parse::<usize>() {
        Ok(index) => Command::Pick(index),
        Err(_) => Command::Invalid,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = CastanetClient::new(ClientOptions {
        base_url: cli.server.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
    })
    .with_context(|| format!("failed to build client for {}", cli.server))?;

    let mut session = NavSession::new(client, TerminalView::new());
    session.start().await;
    session.drain_summaries().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!();
        println!("select an entry (0 = previous, q = quit):");
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_command(&line) {
            Command::Quit => break,
            Command::Empty => {}
            Command::Invalid => println!("not a menu number: {}", line.trim()),
            Command::Pick(index) => {
                // Ends the view borrow before the session is driven.
                let selection = session.view().entry(index).map(Selection::from);
                match selection {
                    Some(selection) => {
                        session.select(selection).await;
                        session.drain_summaries().await;
                    }
                    None => println!(
                        "no entry {index}; the menu has {} entries",
                        session.view().menu_len()
                    ),
                }
            }
        }
    }
    Ok(())
}
