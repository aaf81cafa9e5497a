//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせて発行フローを実現
//! - Repository traitに依存（実装には依存しない）
//! - 進捗は `ProgressReporter` に通知し、出力先は知らない
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object
//! - **reporter**: 進捗イベントの通知先
//! - **use_cases**: ユースケース

pub mod dto;
pub mod reporter;
pub mod use_cases;
