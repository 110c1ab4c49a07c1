//! ファイルI/O操作
//!
//! 呼び出しごとにファイルを開き、処理し、閉じる。
//! 書き込みはバッファを明示的にflushしてエラーを取りこぼさない。

use crate::error::{Result, TextFileError};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// 書き込みモード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// 切り詰めてから書き込む
    Truncate,
    /// 末尾に追記する
    Append,
}

/// I/Oエラーをパス付きで変換し、警告ログを出す
fn map_io_error(path: &Path, operation: &str, error: std::io::Error) -> TextFileError {
    log::warn!("{} failed for {}: {}", operation, path.display(), error);
    TextFileError::from_io(path, error)
}

/// ファイル全体をUTF-8テキストとして読み込み
pub fn read_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| map_io_error(path, "read", e))?;
    log::trace!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// 断片を順に書き込む（ファイルが無ければ作成）
pub fn write_chunks<'a, I>(path: &Path, mode: WriteMode, chunks: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Truncate => options.write(true).truncate(true),
        WriteMode::Append => options.append(true),
    };

    let file = options
        .open(path)
        .map_err(|e| map_io_error(path, "open", e))?;
    let mut writer = BufWriter::new(file);
    let mut written = 0usize;

    for chunk in chunks {
        writer
            .write_all(chunk.as_bytes())
            .map_err(|e| map_io_error(path, "write", e))?;
        written += chunk.len();
    }

    writer.flush().map_err(|e| map_io_error(path, "flush", e))?;
    log::trace!("wrote {} bytes to {} ({:?})", written, path.display(), mode);

    Ok(written)
}
