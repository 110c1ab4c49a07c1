//! エラーハンドリング
//!
//! テキストファイル操作で発生するエラー型を定義する。
//! どのエラーも対象ファイルのパスを保持する。

use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/// テキストファイル操作のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextFileError {
    /// ファイルが存在しない
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// アクセス権限がない
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// パスとして不正
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// UTF-8として読めない内容
    #[error("Encoding error in {path}: {message}")]
    Encoding { path: String, message: String },

    /// その他のI/Oエラー
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },
}

impl TextFileError {
    /// `std::io::Error` を対象パス付きのエラーに変換
    pub fn from_io(path: &Path, error: std::io::Error) -> Self {
        let path = path.display().to_string();

        match error.kind() {
            ErrorKind::NotFound => TextFileError::NotFound { path },
            ErrorKind::PermissionDenied => TextFileError::PermissionDenied { path },
            ErrorKind::InvalidInput => TextFileError::InvalidPath { path },
            ErrorKind::InvalidData => TextFileError::Encoding {
                path,
                message: error.to_string(),
            },
            _ => TextFileError::Io {
                path,
                message: error.to_string(),
            },
        }
    }

    /// エラーの対象パス
    pub fn path(&self) -> &str {
        match self {
            TextFileError::NotFound { path }
            | TextFileError::PermissionDenied { path }
            | TextFileError::InvalidPath { path }
            | TextFileError::Encoding { path, .. }
            | TextFileError::Io { path, .. } => path,
        }
    }

    /// ファイル不在によるエラーか
    pub fn is_not_found(&self) -> bool {
        matches!(self, TextFileError::NotFound { .. })
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, TextFileError>;
