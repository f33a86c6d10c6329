//! shakmaty を使ったルールエンジン実装
//!
//! ドメイン層はチェスのルールを知らないので、UCI の解釈・合法性判定・
//! 終局判定・FEN 描画はすべてここで shakmaty に委譲します。
//! 投了はルール上の概念ではないため、局面に重ねて保持します。

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{Chess, Color, EnPassantMode, Position};

use crate::domain::{GamePosition, IllegalMoveError, MoveOutcome, RuleEngine, Side};

/// shakmaty ベースのルールエンジン
pub struct ShakmatyRules;

impl RuleEngine for ShakmatyRules {
    fn new_position(&self) -> Box<dyn GamePosition> {
        Box::new(ShakmatyPosition::new())
    }
}

/// shakmaty の局面に投了状態を重ねたもの
pub struct ShakmatyPosition {
    position: Chess,
    resigned: Option<Side>,
}

impl ShakmatyPosition {
    pub fn new() -> Self {
        Self {
            position: Chess::default(),
            resigned: None,
        }
    }
}

impl Default for ShakmatyPosition {
    fn default() -> Self {
        Self::new()
    }
}

fn color_to_side(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

impl GamePosition for ShakmatyPosition {
    fn turn(&self) -> Side {
        color_to_side(self.position.turn())
    }

    fn apply_move(&mut self, notation: &str) -> Result<MoveOutcome, IllegalMoveError> {
        if self.has_ended() {
            return Err(IllegalMoveError::new("game is already over"));
        }
        let uci: UciMove = notation
            .parse()
            .map_err(|_| IllegalMoveError::new(format!("invalid UCI notation '{notation}'")))?;
        // to_move は現局面に対する合法性も検証する
        let chess_move = uci
            .to_move(&self.position)
            .map_err(|_| IllegalMoveError::new(format!("illegal move '{notation}'")))?;
        self.position = self
            .position
            .clone()
            .play(&chess_move)
            .map_err(|_| IllegalMoveError::new(format!("illegal move '{notation}'")))?;
        Ok(MoveOutcome {
            next_turn: self.turn(),
            game_over: self.position.is_game_over(),
        })
    }

    fn resign(&mut self, side: Side) {
        self.resigned = Some(side);
    }

    fn has_ended(&self) -> bool {
        self.resigned.is_some() || self.position.is_game_over()
    }

    fn render(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }
}
