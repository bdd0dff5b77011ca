// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::Candidate;

/// 默认的最短标题长度（按字符计）
pub const DEFAULT_MIN_TITLE_CHARS: usize = 5;

/// 关键词相关性策略
///
/// 基础关键词集合命中其一即可；若配置了额外要求的关键词（如地区词），
/// 还必须命中其中之一。关键词按区分大小写的子串匹配。
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordPolicy {
    keywords: Vec<String>,
    required_keywords: Vec<String>,
    min_title_chars: usize,
}

impl KeywordPolicy {
    /// 创建只包含基础关键词的策略
    pub fn new(keywords: Vec<String>, min_title_chars: usize) -> Self {
        Self {
            keywords,
            required_keywords: Vec::new(),
            min_title_chars,
        }
    }

    /// 叠加信息源级别的额外关键词要求
    pub fn with_required(mut self, required_keywords: Vec<String>) -> Self {
        self.required_keywords = required_keywords;
        self
    }

    /// 判断候选链接是否与招考资讯相关
    ///
    /// # 参数
    ///
    /// * `candidate` - 待判断的候选链接
    ///
    /// # 返回值
    ///
    /// 文本长度达到阈值、命中基础关键词且满足额外要求时返回true
    pub fn is_relevant(&self, candidate: &Candidate) -> bool {
        let text = candidate.text.trim();

        // “更多”“首页”之类的短链接即使含有关键词片段也不要
        if text.chars().count() < self.min_title_chars {
            return false;
        }

        if !contains_any(text, &self.keywords) {
            return false;
        }

        self.required_keywords.is_empty() || contains_any(text, &self.required_keywords)
    }
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|k| !k.is_empty() && text.contains(k.as_str()))
}
