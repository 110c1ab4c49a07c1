//! 検索用マッチャー

/// 単語単位のマッチング条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatcher {
    key: String,
    whole_word: bool,
    case_sensitive: bool,
}

impl WordMatcher {
    /// インスタンスを作成
    ///
    /// 大文字小文字を区別しない場合、キーはここで一度だけ小文字化する。
    pub fn new(key: &str, whole_word: bool, case_sensitive: bool) -> Self {
        let key = if case_sensitive {
            key.to_string()
        } else {
            key.to_lowercase()
        };

        Self {
            key,
            whole_word,
            case_sensitive,
        }
    }

    /// 単語がキーにマッチするか
    pub fn matches(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.compare(word)
        } else {
            self.compare(&word.to_lowercase())
        }
    }

    /// 最初にマッチする単語があるか
    pub fn matches_any<'a, I>(&self, words: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        words.into_iter().any(|word| self.matches(word))
    }

    fn compare(&self, word: &str) -> bool {
        if self.whole_word {
            word == self.key
        } else {
            word.contains(self.key.as_str())
        }
    }
}
