//! # Data Transfer Objects

pub mod publish_config;
