//! Request handlers.

mod http;
mod stream;

pub use http::{create_match, get_board, health_check, resign_match, submit_move};
pub use stream::stream_match;
