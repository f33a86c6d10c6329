//! Conversion logic between DTOs and domain values.

use taikyoku_shared::time::timestamp_to_rfc3339;

use crate::domain::MatchEvent;
use crate::infrastructure::dto::sse as dto;

// ========================================
// Domain Event → DTO
// ========================================

impl From<MatchEvent> for dto::MatchEventDto {
    fn from(event: MatchEvent) -> Self {
        match event {
            MatchEvent::OpponentJoined {
                username,
                side,
                start,
                deadline,
            } => dto::MatchEventDto::OpponentJoined {
                opponent_username: username.into_string(),
                opponent_side: side.to_string(),
                start_time: timestamp_to_rfc3339(start.value()),
                end_time: timestamp_to_rfc3339(deadline.value()),
            },
            MatchEvent::MoveMade { notation } => dto::MatchEventDto::MoveMade { r#move: notation },
            MatchEvent::Resigned => dto::MatchEventDto::Resigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Side, Timestamp, Username};

    #[test]
    fn test_opponent_joined_to_dto() {
        // テスト項目: OpponentJoined イベントが DTO に変換される
        // given (前提条件):
        let event = MatchEvent::OpponentJoined {
            username: Username::new("bob".to_string()).unwrap(),
            side: Side::Black,
            start: Timestamp::new(1_672_531_200_000),
            deadline: Timestamp::new(1_672_534_800_000),
        };

        // when (操作):
        let dto: dto::MatchEventDto = event.into();

        // then (期待する結果):
        assert_eq!(
            dto,
            dto::MatchEventDto::OpponentJoined {
                opponent_username: "bob".to_string(),
                opponent_side: "black".to_string(),
                start_time: "2023-01-01T00:00:00+00:00".to_string(),
                end_time: "2023-01-01T01:00:00+00:00".to_string(),
            }
        );
    }

    #[test]
    fn test_move_made_to_dto() {
        // テスト項目: MoveMade イベントが DTO に変換される
        // given (前提条件):
        let event = MatchEvent::MoveMade {
            notation: "e2e4".to_string(),
        };

        // when (操作):
        let dto: dto::MatchEventDto = event.into();

        // then (期待する結果):
        assert_eq!(
            dto,
            dto::MatchEventDto::MoveMade {
                r#move: "e2e4".to_string()
            }
        );
    }

    #[test]
    fn test_event_dto_json_shape() {
        // テスト項目: DTO の JSON が type フィールドで判別できる形になる
        // given (前提条件):
        let move_dto = dto::MatchEventDto::MoveMade {
            r#move: "e2e4".to_string(),
        };
        let resigned_dto = dto::MatchEventDto::Resigned;

        // when (操作):
        let move_json = serde_json::to_value(&move_dto).unwrap();
        let resigned_json = serde_json::to_value(&resigned_dto).unwrap();

        // then (期待する結果):
        assert_eq!(
            move_json,
            serde_json::json!({"type": "move_made", "move": "e2e4"})
        );
        assert_eq!(resigned_json, serde_json::json!({"type": "resigned"}));
    }
}
