// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::Candidate;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// 从页面中提取候选链接
///
/// 优先在列表容器选择器命中的元素内查找链接；选择器缺失、无效、
/// 未命中或容器内没有可用链接时，退回到整页的所有 `<a>` 元素。
/// 结果保持文档顺序（各站点通常把最新的公告放在最前）。
/// 没有可见文本或没有 `href` 属性的链接会被跳过
///
/// # 参数
///
/// * `html` - 页面HTML
/// * `list_selector` - 列表容器的CSS选择器
pub fn extract_candidates(html: &str, list_selector: Option<&str>) -> Vec<Candidate> {
    let document = Html::parse_document(html);
    let Ok(anchor_selector) = Selector::parse("a") else {
        return Vec::new();
    };

    if let Some(hint) = list_selector {
        match Selector::parse(hint) {
            Ok(container_selector) => {
                let candidates: Vec<Candidate> = document
                    .select(&anchor_selector)
                    .filter(|anchor| inside_container(anchor, &container_selector))
                    .filter_map(candidate_from)
                    .collect();

                if !candidates.is_empty() {
                    debug!("容器选择器 {} 提取到 {} 个链接", hint, candidates.len());
                    return candidates;
                }
                debug!("容器选择器 {} 未找到链接，退回到整页", hint);
            }
            Err(e) => warn!("无效的容器选择器 {}: {:?}", hint, e),
        }
    }

    document
        .select(&anchor_selector)
        .filter_map(candidate_from)
        .collect()
}

/// 链接是否位于某个列表容器内（嵌套容器只计一次）
fn inside_container(anchor: &ElementRef<'_>, container_selector: &Selector) -> bool {
    anchor
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|element| container_selector.matches(&element))
}

fn candidate_from(anchor: ElementRef<'_>) -> Option<Candidate> {
    let href = anchor.value().attr("href")?;
    let text = anchor
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        return None;
    }

    Some(Candidate::new(text, href))
}
