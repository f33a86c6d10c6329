//! ドメイン層
//!
//! 対局セッションの状態機械・参加者・イベント配送キューと、
//! ドメイン層が必要とするインターフェース（レジストリ、ルールエンジン）を定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

pub mod entity;
pub mod error;
pub mod event;
pub mod registry;
pub mod rules;
pub mod value_object;

pub use entity::{
    JoinedSeat, MatchSession, MatchStatus, Outbox, OutboxReceiver, Participant, OUTBOX_CAPACITY,
};
pub use error::{JoinError, MoveError};
pub use event::MatchEvent;
pub use registry::MatchRegistry;
pub use rules::{GamePosition, IllegalMoveError, MoveOutcome, RuleEngine};
pub use value_object::{
    MatchId, MatchIdError, MatchIdFactory, Side, Timestamp, Username, UsernameError,
};
