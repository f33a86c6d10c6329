//! 参加者エンティティ

use crate::domain::entity::outbox::Outbox;
use crate::domain::value_object::{Side, Username};

/// 対局に着席しているプレイヤー
///
/// セッション内でユーザー名は一意で、色と 1 対 1 に結び付きます。
/// `outbox` は送信側だけを持ち、受信側は join 時に一度だけ呼び出し元へ
/// 渡されます（ストリームの単一コンシューマを所有権で保証する）。
#[derive(Debug, Clone)]
pub struct Participant {
    pub username: Username,
    pub side: Side,
    pub outbox: Outbox,
}

impl Participant {
    pub fn new(username: Username, side: Side, outbox: Outbox) -> Self {
        Self {
            username,
            side,
            outbox,
        }
    }
}
