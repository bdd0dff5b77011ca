// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 从页面中提取的候选链接
///
/// `href` 保持页面上的原始值，可能是相对路径、绝对路径或无效链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// 链接的可见文本（非空）
    pub text: String,
    /// 原始链接属性
    pub href: String,
}

impl Candidate {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}
