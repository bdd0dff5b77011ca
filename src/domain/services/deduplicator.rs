// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::item::Item;
use std::collections::HashSet;

/// 基于规范化URL的去重器
///
/// 作用域为单次运行，跨信息源共享同一个已见集合，
/// 同一URL只保留按“信息源顺序 → 文档顺序”最先出现的条目
#[derive(Debug, Default)]
pub struct UrlDeduplicator {
    seen_urls: HashSet<String>,
}

impl UrlDeduplicator {
    /// 创建新的去重器
    pub fn new() -> Self {
        Self::default()
    }

    /// 过滤掉已见过的条目
    ///
    /// 保持原有顺序，并把每个保留下来的URL记为已见
    pub fn retain_unseen(&mut self, items: Vec<Item>) -> Vec<Item> {
        items
            .into_iter()
            .filter(|item| self.seen_urls.insert(item.url().to_string()))
            .collect()
    }

    /// 已记录的URL数量
    pub fn seen_count(&self) -> usize {
        self.seen_urls.len()
    }
}
