//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod failure_hint;
pub mod workspace_matcher;
