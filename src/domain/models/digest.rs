// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::item::Item;

/// 单个信息源的条目分组
#[derive(Debug, Clone, PartialEq)]
pub struct SourceGroup {
    pub source_name: String,
    pub items: Vec<Item>,
}

impl SourceGroup {
    pub fn new(source_name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            source_name: source_name.into(),
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 最终发送的日报
///
/// 构建一次、渲染一次，之后不再修改
#[derive(Debug, Clone, PartialEq)]
pub struct Digest {
    /// 运行日期 `YYYY-MM-DD`
    pub date: String,
    /// 按信息源配置顺序排列的分组（不含空分组）
    pub groups: Vec<SourceGroup>,
    /// 推送标题
    pub title: String,
    /// 推送正文
    pub rendered_text: String,
}

impl Digest {
    /// 是否为“无更新”兜底消息
    pub fn is_fallback(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}
