//! Match coordination server for live two-player chess over REST and SSE.
//!
//! Create a match, share the 6-character id, and both players join the SSE
//! stream to play.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin taikyoku-server
//! cargo run --bin taikyoku-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;

use taikyoku_server::{
    infrastructure::{registry::InMemoryMatchRegistry, rule_engine::ShakmatyRules},
    ui::Server,
    usecase::{
        CreateMatchUseCase, GetBoardUseCase, JoinMatchUseCase, ResignMatchUseCase,
        SubmitMoveUseCase,
    },
};
use taikyoku_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Chess match coordination server with SSE event streams", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. RuleEngine
    // 2. Registry (owns the per-match sweepers)
    // 3. UseCases
    // 4. Server

    // 1. Create RuleEngine (shakmaty implementation)
    let rules = Arc::new(ShakmatyRules);

    // 2. Create Registry (in-memory directory of live matches)
    let registry = Arc::new(InMemoryMatchRegistry::new(rules));

    // 3. Create UseCases
    let create_match_usecase = Arc::new(CreateMatchUseCase::new(registry.clone()));
    let join_match_usecase = Arc::new(JoinMatchUseCase::new(registry.clone()));
    let submit_move_usecase = Arc::new(SubmitMoveUseCase::new(registry.clone()));
    let resign_match_usecase = Arc::new(ResignMatchUseCase::new(registry.clone()));
    let get_board_usecase = Arc::new(GetBoardUseCase::new(registry.clone()));

    // 4. Create and run the server
    let server = Server::new(
        create_match_usecase,
        join_match_usecase,
        submit_move_usecase,
        resign_match_usecase,
        get_board_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
