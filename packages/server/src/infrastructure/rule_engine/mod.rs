//! ルールエンジンの実装
//!
//! ## 概要
//!
//! このモジュールはドメイン層の `RuleEngine` / `GamePosition` trait の
//! 具体的な実装を提供します。
//!
//! ## 実装
//!
//! - `shakmaty`: shakmaty ライブラリを使った実装

pub mod shakmaty;

pub use shakmaty::ShakmatyRules;
