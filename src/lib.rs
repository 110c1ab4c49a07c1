//! textfile - 丸ごと扱うテキストファイル操作
//!
//! パスに結び付いたハンドルで読み込み・書き込み・追記・消去・単語検索・集計を行う。

// コアモジュール
pub mod error;

// データ層
pub mod file;

// ロジック層
pub mod search;
pub mod stats;

// 公開API
pub use error::{Result, TextFileError};
pub use file::{LineSeparator, TextFile};
pub use stats::{CountKind, TextStatistics};
