//! Progress Reporting
//!
//! 進捗イベントの出力先

pub mod console_reporter;

pub use console_reporter::ConsoleReporter;
