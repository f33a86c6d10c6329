//! Value Object 定義
//!
//! 不変条件を型で保証する小さな値の集まり。生成時に検証し、
//! 以降は常に正しい値であることを前提にできます。

pub mod match_id;
pub mod side;
pub mod timestamp;
pub mod username;

pub use match_id::{MatchId, MatchIdError, MatchIdFactory};
pub use side::Side;
pub use timestamp::Timestamp;
pub use username::{Username, UsernameError};
