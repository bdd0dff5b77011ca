// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;

/// 信息源配置
///
/// 每个信息源对应一个公告列表页面
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// 信息源名称（在日报中作为分组标题）
    pub name: String,
    /// 抓取入口页面
    pub entry_url: String,
    /// 解析相对链接时使用的站点根地址
    pub base_url: String,
    /// 公告列表容器的CSS选择器，找不到时退回到整页的所有链接
    #[serde(default)]
    pub list_selector: Option<String>,
    /// 该信息源额外要求的关键词（至少命中其一）
    #[serde(default)]
    pub required_keywords: Vec<String>,
}

impl SourceConfig {
    pub fn new(name: &str, entry_url: &str, base_url: &str) -> Self {
        Self {
            name: name.to_string(),
            entry_url: entry_url.to_string(),
            base_url: base_url.to_string(),
            list_selector: None,
            required_keywords: Vec::new(),
        }
    }

    pub fn with_list_selector(mut self, selector: &str) -> Self {
        self.list_selector = Some(selector.to_string());
        self
    }

    pub fn with_required_keywords(mut self, keywords: &[&str]) -> Self {
        self.required_keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }
}

/// 内置的默认信息源
pub fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig::new(
            "河南省教育考试院",
            "http://www.haeea.cn/",
            "http://www.haeea.cn",
        )
        .with_list_selector(".news-list, .list"),
        SourceConfig::new(
            "河南省教育厅",
            "http://jyt.henan.gov.cn/",
            "http://jyt.henan.gov.cn",
        )
        .with_list_selector(".news_list, .list-box"),
        // 阳光高考汇总全国资讯，需要收窄到河南
        SourceConfig::new(
            "阳光高考",
            "https://gaokao.chsi.com.cn/",
            "https://gaokao.chsi.com.cn",
        )
        .with_required_keywords(&["河南"]),
    ]
}
