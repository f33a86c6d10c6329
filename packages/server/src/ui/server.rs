//! Server execution logic.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    CreateMatchUseCase, GetBoardUseCase, JoinMatchUseCase, ResignMatchUseCase, SubmitMoveUseCase,
};

use super::{
    handler::{create_match, get_board, health_check, resign_match, stream_match, submit_move},
    signal::shutdown_signal,
    state::AppState,
};

/// Match coordination server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     create_match_usecase,
///     join_match_usecase,
///     submit_move_usecase,
///     resign_match_usecase,
///     get_board_usecase,
/// );
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// CreateMatchUseCase（対局作成のユースケース）
    create_match_usecase: Arc<CreateMatchUseCase>,
    /// JoinMatchUseCase（対局参加のユースケース）
    join_match_usecase: Arc<JoinMatchUseCase>,
    /// SubmitMoveUseCase（指し手送信のユースケース）
    submit_move_usecase: Arc<SubmitMoveUseCase>,
    /// ResignMatchUseCase（投了のユースケース）
    resign_match_usecase: Arc<ResignMatchUseCase>,
    /// GetBoardUseCase（局面取得のユースケース）
    get_board_usecase: Arc<GetBoardUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        create_match_usecase: Arc<CreateMatchUseCase>,
        join_match_usecase: Arc<JoinMatchUseCase>,
        submit_move_usecase: Arc<SubmitMoveUseCase>,
        resign_match_usecase: Arc<ResignMatchUseCase>,
        get_board_usecase: Arc<GetBoardUseCase>,
    ) -> Self {
        Self {
            create_match_usecase,
            join_match_usecase,
            submit_move_usecase,
            resign_match_usecase,
            get_board_usecase,
        }
    }

    /// Run the match server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already-bound listener
    ///
    /// Split out of [`Server::run`] so integration tests can bind an
    /// ephemeral port themselves.
    pub async fn serve(
        self,
        listener: tokio::net::TcpListener,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            create_match_usecase: self.create_match_usecase,
            join_match_usecase: self.join_match_usecase,
            submit_move_usecase: self.submit_move_usecase,
            resign_match_usecase: self.resign_match_usecase,
            get_board_usecase: self.get_board_usecase,
        });

        // Define handlers
        let app = Router::new()
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/matches", post(create_match))
            .route("/api/matches/{id}", get(get_board).put(submit_move))
            // SSE エンドポイント（join + ストリーム）
            .route(
                "/api/matches/{id}/play",
                get(stream_match).delete(resign_match),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Start the server
        tracing::info!("match server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
