//! ファイル操作モジュール
//!
//! - 読み込みは `\n`・`\r\n`・`\r` を行末として扱う
//! - 書き込みはアトミックではない（途中で失敗すると部分的に書かれうる）
//! - ロックなし（同じパスへの同時書き込みは後勝ち）

pub mod handle;
pub mod io;
pub mod lines;

pub use handle::TextFile;
pub use io::{read_text, write_chunks, WriteMode};
pub use lines::{join_lines, split_lines, LineSeparator, Lines};
