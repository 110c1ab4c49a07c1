//! 行・単語・文字の集計
//!
//! 1回の走査で5種類のカウンタを同時に求める。
//! `spaces` は空白で分割した後の単語内を数えるため、常に0になる。

use crate::search::split_words;
use serde::{Deserialize, Serialize};

/// 集計の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountKind {
    /// 空行（長さ0の行のみ。空白だけの行は含まない）
    EmptyLine,
    /// 行数
    Line,
    /// 単語数
    Word,
    /// 単語に含まれる文字数
    Character,
    /// 単語に含まれる半角スペース数
    Spaces,
}

/// 集計結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub empty_lines: u64,
    pub lines: u64,
    pub words: u64,
    pub characters: u64,
    pub spaces: u64,
}

impl TextStatistics {
    /// 行の並びから集計する
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut stats = Self::default();

        for line in lines {
            if line.is_empty() {
                stats.empty_lines += 1;
            }
            stats.lines += 1;

            for word in split_words(line) {
                stats.words += 1;

                for ch in word.chars() {
                    if ch == ' ' {
                        stats.spaces += 1;
                    }
                    stats.characters += 1;
                }
            }
        }

        stats
    }

    /// 指定した種類のカウンタ値
    pub fn get(&self, kind: CountKind) -> u64 {
        match kind {
            CountKind::EmptyLine => self.empty_lines,
            CountKind::Line => self.lines,
            CountKind::Word => self.words,
            CountKind::Character => self.characters,
            CountKind::Spaces => self.spaces,
        }
    }

    /// 指定した種類の合計（重複指定はその分だけ加算される）
    pub fn total(&self, kinds: &[CountKind]) -> u64 {
        kinds.iter().map(|&kind| self.get(kind)).sum()
    }
}
