//! Server state shared across handlers.

use std::sync::Arc;

use crate::usecase::{
    CreateMatchUseCase, GetBoardUseCase, JoinMatchUseCase, ResignMatchUseCase, SubmitMoveUseCase,
};

/// Shared application state
pub struct AppState {
    /// CreateMatchUseCase（対局作成のユースケース）
    pub create_match_usecase: Arc<CreateMatchUseCase>,
    /// JoinMatchUseCase（対局参加のユースケース）
    pub join_match_usecase: Arc<JoinMatchUseCase>,
    /// SubmitMoveUseCase（指し手送信のユースケース）
    pub submit_move_usecase: Arc<SubmitMoveUseCase>,
    /// ResignMatchUseCase（投了のユースケース）
    pub resign_match_usecase: Arc<ResignMatchUseCase>,
    /// GetBoardUseCase（局面取得のユースケース）
    pub get_board_usecase: Arc<GetBoardUseCase>,
}
