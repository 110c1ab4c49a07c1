//! 単語分割
//!
//! 空白文字 `[ \t\n\x0B\f\r]` の連続で行を区切る。
//!
//! - 空白を含まない行はその行自体が1トークン（空行は空トークン1つ）
//! - 行頭が空白なら先頭に空トークンが入る
//! - 末尾の空トークンは取り除く（空白だけの行は0トークン）

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_run() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| {
        Regex::new(r"[ \t\n\x0B\x0C\r]+").expect("空白パターンのコンパイルに失敗しました")
    })
}

/// 1行を単語に分割する
pub fn split_words(line: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = whitespace_run().split(line).collect();

    if tokens.len() > 1 {
        while tokens.last().is_some_and(|token| token.is_empty()) {
            tokens.pop();
        }
    }

    tokens
}

/// 複数行を単語に分割し、ファイル順に平坦化する
pub fn words_of<'a, I>(lines: I) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().flat_map(split_words)
}
