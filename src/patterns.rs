//! Compiled regex patterns and page markers shared across the pipeline.
//!
//! Patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Trailing "(expand)" marker appended to truncated review bodies.
pub static EXPAND_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(展开\)\s*$").expect("EXPAND_MARKER regex"));

/// Matches runs of whitespace for normalization.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

/// Body-text markers of a login wall.
pub const LOGIN_MARKERS: [&str; 2] = ["您尚未登录", "请先登录"];

/// Body-text markers of a bot interstitial.
pub const BOT_MARKERS: [&str; 2] = ["机器人", "robot"];
