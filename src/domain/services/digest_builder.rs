// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::digest::{Digest, SourceGroup};
use tracing::debug;

/// 每个信息源条目上限的允许范围
pub const MIN_ITEMS_PER_SOURCE: usize = 10;
pub const MAX_ITEMS_PER_SOURCE: usize = 20;

/// 日报构建器
///
/// 截断每个分组、渲染Markdown正文。渲染是纯文本拼接，
/// 同样的输入总是得到逐字节相同的输出
#[derive(Debug, Clone)]
pub struct DigestBuilder {
    title: String,
    footer: String,
    max_items_per_source: usize,
}

impl DigestBuilder {
    /// 创建新的日报构建器
    ///
    /// # 参数
    ///
    /// * `title` - 日报标题（不含日期）
    /// * `footer` - 正文末尾的提示语
    /// * `max_items_per_source` - 每个信息源最多展示的条目数，会被限制在10到20之间
    pub fn new(title: impl Into<String>, footer: impl Into<String>, max_items_per_source: usize) -> Self {
        Self {
            title: title.into(),
            footer: footer.into(),
            max_items_per_source: max_items_per_source
                .clamp(MIN_ITEMS_PER_SOURCE, MAX_ITEMS_PER_SOURCE),
        }
    }

    pub fn max_items_per_source(&self) -> usize {
        self.max_items_per_source
    }

    /// 构建日报
    ///
    /// 分组顺序保持信息源配置顺序，组内不重新排序，只截断。
    /// 所有分组都为空时返回“无更新”兜底消息
    pub fn build(&self, date: &str, groups: Vec<SourceGroup>) -> Digest {
        let groups: Vec<SourceGroup> = groups
            .into_iter()
            .filter(|g| !g.is_empty())
            .map(|mut g| {
                g.items.truncate(self.max_items_per_source);
                g
            })
            .collect();

        if groups.is_empty() {
            debug!("所有信息源均无条目，使用兜底消息");
            return Digest {
                date: date.to_string(),
                groups,
                title: format!("{} {}（无更新）", self.title, date),
                rendered_text: Self::fallback_message(date),
            };
        }

        let rendered_text = self.render(date, &groups);
        Digest {
            date: date.to_string(),
            title: format!("{} {}", self.title, date),
            groups,
            rendered_text,
        }
    }

    /// 渲染Markdown正文
    pub fn render(&self, date: &str, groups: &[SourceGroup]) -> String {
        let mut lines = vec![format!("## 📢 {} ({})", self.title, date), "---".to_string()];

        for group in groups.iter().filter(|g| !g.is_empty()) {
            lines.push(format!("### {}", group.source_name));
            for (i, item) in group.items.iter().enumerate() {
                lines.push(format!(
                    "{}. [{}]({})",
                    i + 1,
                    escape_link_label(item.title()),
                    item.url()
                ));
            }
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push(format!("*💡 {}*", self.footer));
        lines.join("\n")
    }

    /// 无更新时的兜底消息
    pub fn fallback_message(date: &str) -> String {
        format!("{} 各信息源均未发现新的招考资讯。", date)
    }
}

/// 方括号会提前结束Markdown链接文本，替换为全角形式
fn escape_link_label(title: &str) -> String {
    title.replace('[', "［").replace(']', "］")
}

#[cfg(test)]
#[path = "digest_builder_test.rs"]
mod tests;
