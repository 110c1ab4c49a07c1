//! 行分割と行区切り
//!
//! 読み込み時は `\n`・`\r\n`・単独の `\r` のいずれも行末として扱い、
//! 書き込み時は [`LineSeparator`] で指定された区切りを使う。

use serde::{Deserialize, Serialize};

/// 書き込み時の行区切り
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineSeparator {
    /// 実行プラットフォームの区切り（Windowsは `\r\n`、それ以外は `\n`）
    #[default]
    Platform,
    /// `\n` (Unix)
    Lf,
    /// `\r\n` (Windows)
    CrLf,
}

impl LineSeparator {
    /// 区切り文字列
    pub fn as_str(self) -> &'static str {
        match self {
            LineSeparator::Platform => platform_separator(),
            LineSeparator::Lf => "\n",
            LineSeparator::CrLf => "\r\n",
        }
    }
}

#[cfg(windows)]
fn platform_separator() -> &'static str {
    "\r\n"
}

#[cfg(not(windows))]
fn platform_separator() -> &'static str {
    "\n"
}

/// 行単位のイテレータ（行末記号は含まない）
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                let line = &self.rest[..end];
                let terminator_len = if self.rest[end..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[end + terminator_len..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// 内容を行に分割する
///
/// 末尾の行末記号は空行を生まない。空文字列は0行。
pub fn split_lines(content: &str) -> Lines<'_> {
    Lines { rest: content }
}

/// 区切りで連結した文字列を作る（末尾に区切りは付けない）
pub fn join_lines<I, S>(lines: I, separator: LineSeparator) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();

    for (index, line) in lines.into_iter().enumerate() {
        if index > 0 {
            joined.push_str(separator.as_str());
        }
        joined.push_str(line.as_ref());
    }

    joined
}
