//! 検索モジュール
//!
//! 行を単語に分割し、単語単位でキーを照合する。

pub mod matcher;
pub mod words;

pub use matcher::WordMatcher;
pub use words::{split_words, words_of};
