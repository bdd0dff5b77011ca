// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 通过过滤与规范化的资讯条目
///
/// 构建后不可变；`url` 一定是合法的绝对URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    url: String,
    source: String,
}

impl Item {
    pub fn new(title: String, url: String, source: String) -> Self {
        Self { title, url, source }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// 来源名称，例如 "河南省教育考试院"
    pub fn source(&self) -> &str {
        &self.source
    }
}
