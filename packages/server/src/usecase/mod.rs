//! UseCase 層
//!
//! 1 操作 1 ユースケース。各ユースケースはドメイン層の trait
//! （[`MatchRegistry`](crate::domain::MatchRegistry)）にだけ依存し、
//! Infrastructure 層の具体的な実装には依存しません。

pub mod create_match;
pub mod error;
pub mod get_board;
pub mod join_match;
pub mod resign_match;
pub mod submit_move;

pub use create_match::{CreateMatchUseCase, CreatedMatch};
pub use error::{GetBoardError, JoinMatchError, SubmitMoveError};
pub use get_board::GetBoardUseCase;
pub use join_match::JoinMatchUseCase;
pub use resign_match::ResignMatchUseCase;
pub use submit_move::SubmitMoveUseCase;
