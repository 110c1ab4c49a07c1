//! テキストファイルハンドル
//!
//! パスだけを保持する不変な値。各操作は毎回ファイルを開いて閉じ、
//! 呼び出し間で内容をキャッシュしない。

use crate::error::Result;
use crate::file::io::{self, WriteMode};
use crate::file::lines::{join_lines, split_lines, LineSeparator};
use crate::search::{words_of, WordMatcher};
use crate::stats::{CountKind, TextStatistics};
use std::path::{Path, PathBuf};

/// 1つのパスに結び付いたテキストファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    path: PathBuf,
    line_separator: LineSeparator,
}

impl TextFile {
    /// ハンドルを作成（存在確認はしない）
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            line_separator: LineSeparator::default(),
        }
    }

    /// 行の並びを書き込む際の区切りを変更
    pub fn with_line_separator(mut self, separator: LineSeparator) -> Self {
        self.line_separator = separator;
        self
    }

    /// 対象パス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 行の並びを書き込む際の区切り
    pub fn line_separator(&self) -> LineSeparator {
        self.line_separator
    }

    /// ファイル全体を読み込む
    ///
    /// 各行の後ろに `\n` を付けて連結する（最終行も含む）。
    /// 元の行末が `\r\n` や `\r` でも `\n` になる。
    pub fn read(&self) -> Result<String> {
        log::debug!("read: {}", self.path.display());
        let content = io::read_text(&self.path)?;

        let mut text = String::with_capacity(content.len() + 1);
        for line in split_lines(&content) {
            text.push_str(line);
            text.push('\n');
        }

        Ok(text)
    }

    /// 先頭行を読み込む（空ファイルなら `None`）
    pub fn read_first_line(&self) -> Result<Option<String>> {
        log::debug!("read_first_line: {}", self.path.display());
        let content = io::read_text(&self.path)?;
        Ok(split_lines(&content).next().map(str::to_string))
    }

    /// 最終行を読み込む（空ファイルなら `None`）
    pub fn read_last_line(&self) -> Result<Option<String>> {
        log::debug!("read_last_line: {}", self.path.display());
        let content = io::read_text(&self.path)?;
        Ok(split_lines(&content).last().map(str::to_string))
    }

    /// 内容を切り詰めて書き込む（改行は付けない）
    pub fn write(&self, content: &str) -> Result<()> {
        log::debug!("write: {}", self.path.display());
        io::write_chunks(&self.path, WriteMode::Truncate, [content])?;
        Ok(())
    }

    /// 行の並びを区切りで連結して書き込む（末尾に区切りは付けない）
    pub fn write_lines<I, S>(&self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        log::debug!("write_lines: {}", self.path.display());
        self.put_lines(WriteMode::Truncate, lines)
    }

    /// 末尾に追記する（区切りは挿入しない）
    pub fn append(&self, content: &str) -> Result<()> {
        log::debug!("append: {}", self.path.display());
        io::write_chunks(&self.path, WriteMode::Append, [content])?;
        Ok(())
    }

    /// 行の並びを区切りで連結して追記する（前後に区切りは付けない）
    pub fn append_lines<I, S>(&self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        log::debug!("append_lines: {}", self.path.display());
        self.put_lines(WriteMode::Append, lines)
    }

    /// ファイルを空にする
    pub fn clear(&self) -> Result<()> {
        log::debug!("clear: {}", self.path.display());
        io::write_chunks(&self.path, WriteMode::Truncate, std::iter::empty::<&str>())?;
        Ok(())
    }

    /// 単語単位でキーを検索する
    ///
    /// * `whole_word` - 完全一致なら `true`、部分一致なら `false`
    /// * `case_sensitive` - 大文字小文字を区別するか
    pub fn search(&self, key: &str, whole_word: bool, case_sensitive: bool) -> Result<bool> {
        log::debug!(
            "search: {} (key={:?}, whole_word={}, case_sensitive={})",
            self.path.display(),
            key,
            whole_word,
            case_sensitive
        );
        let content = io::read_text(&self.path)?;
        let matcher = WordMatcher::new(key, whole_word, case_sensitive);

        Ok(matcher.matches_any(words_of(split_lines(&content))))
    }

    /// 指定した種類のカウンタの合計
    ///
    /// 同じ種類を複数回指定するとその回数分加算される。
    pub fn count(&self, kinds: &[CountKind]) -> Result<u64> {
        let stats = self.statistics()?;
        Ok(stats.total(kinds))
    }

    /// 5種類のカウンタをまとめて求める
    pub fn statistics(&self) -> Result<TextStatistics> {
        log::debug!("statistics: {}", self.path.display());
        let content = io::read_text(&self.path)?;
        let stats = TextStatistics::from_lines(split_lines(&content));
        log::trace!("statistics for {}: {:?}", self.path.display(), stats);
        Ok(stats)
    }

    fn put_lines<I, S>(&self, mode: WriteMode, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = join_lines(lines, self.line_separator);
        io::write_chunks(&self.path, mode, [joined.as_str()])?;
        Ok(())
    }
}
