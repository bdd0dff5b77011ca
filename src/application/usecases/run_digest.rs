// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use chrono::{FixedOffset, Offset, Utc};
use tracing::{debug, info, warn};

use crate::config::settings::Settings;
use crate::domain::models::digest::{Digest, SourceGroup};
use crate::domain::models::item::Item;
use crate::domain::models::source::SourceConfig;
use crate::domain::services::deduplicator::UrlDeduplicator;
use crate::domain::services::digest_builder::DigestBuilder;
use crate::domain::services::notification_service::{DeliveryOutcome, NotificationService};
use crate::domain::services::relevance_filter::KeywordPolicy;
use crate::engines::reqwest_engine::ReqwestFetcher;
use crate::engines::traits::PageFetcher;
use crate::infrastructure::extractor::extract_candidates;
use crate::infrastructure::services::pushplus_service_impl::PushPlusServiceImpl;
use crate::utils::errors::AppError;
use crate::utils::url_utils::normalize_link;

// === Section: Run Report ===

/// 单次运行的结果
#[derive(Debug, Clone)]
pub struct RunReport {
    /// 本次生成的日报
    pub digest: Digest,
    /// 推送结果
    pub delivery: DeliveryOutcome,
    /// 抓取失败的信息源名称
    pub failed_sources: Vec<String>,
}

// === Section: Use Case Definition ===

/// 日报流水线
///
/// 逐个处理信息源（抓取 → 提取 → 过滤 → 规范化 → 去重），
/// 合并为一份日报后只调用一次推送服务
pub struct DigestPipeline {
    settings: Arc<Settings>,
    fetcher: Arc<dyn PageFetcher>,
    notifier: Arc<dyn NotificationService>,
    builder: DigestBuilder,
}

// === Section: Implementation ===

impl DigestPipeline {
    pub fn new(
        settings: Arc<Settings>,
        fetcher: Arc<dyn PageFetcher>,
        notifier: Arc<dyn NotificationService>,
    ) -> Self {
        let builder = DigestBuilder::new(
            settings.push.title.clone(),
            settings.digest.footer.clone(),
            settings.digest.max_items_per_source,
        );

        Self {
            settings,
            fetcher,
            notifier,
            builder,
        }
    }

    /// 以当前日期执行一次完整运行
    pub async fn run(&self) -> RunReport {
        let date = run_date(self.settings.digest.utc_offset_hours);
        self.run_for_date(&date).await
    }

    /// 以指定日期执行一次完整运行
    pub async fn run_for_date(&self, date: &str) -> RunReport {
        let (groups, failed_sources) = self.collect_groups().await;
        let digest = self.builder.build(date, groups);

        if digest.is_fallback() {
            info!("今日无相关资讯，发送兜底消息");
        } else {
            info!(
                "日报生成完成: {} 个信息源, {} 条资讯",
                digest.groups.len(),
                digest.item_count()
            );
        }

        let delivery = self.notifier.send(&digest.title, &digest.rendered_text).await;
        info!("推送结果: {}", delivery);

        RunReport {
            digest,
            delivery,
            failed_sources,
        }
    }

    /// 按配置顺序处理所有信息源
    ///
    /// 单个信息源抓取失败只会让该信息源贡献为空，不影响其他信息源
    async fn collect_groups(&self) -> (Vec<SourceGroup>, Vec<String>) {
        let mut dedup = UrlDeduplicator::new();
        let mut groups = Vec::with_capacity(self.settings.sources.len());
        let mut failed_sources = Vec::new();

        for source in &self.settings.sources {
            let items = match self.fetcher.fetch(source).await {
                Ok(html) => self.process_source(source, &html, &mut dedup),
                Err(e) => {
                    warn!(
                        "[{}] 抓取 {} ({}) 失败: {}",
                        self.fetcher.name(),
                        source.name,
                        source.entry_url,
                        e
                    );
                    failed_sources.push(source.name.clone());
                    Vec::new()
                }
            };
            groups.push(SourceGroup::new(source.name.clone(), items));
        }

        debug!("本次运行共记录 {} 个唯一链接", dedup.seen_count());
        (groups, failed_sources)
    }

    fn process_source(
        &self,
        source: &SourceConfig,
        html: &str,
        dedup: &mut UrlDeduplicator,
    ) -> Vec<Item> {
        let candidates = extract_candidates(html, source.list_selector.as_deref());
        let total = candidates.len();

        let policy = KeywordPolicy::new(
            self.settings.filter.keywords.clone(),
            self.settings.filter.min_title_chars,
        )
        .with_required(source.required_keywords.clone());

        let relevant: Vec<_> = candidates
            .into_iter()
            .filter(|c| policy.is_relevant(c))
            .collect();
        let relevant_count = relevant.len();

        let items: Vec<Item> = relevant
            .into_iter()
            .filter_map(|c| {
                normalize_link(&c.href, &source.base_url)
                    .map(|url| Item::new(c.text, url, source.name.clone()))
            })
            .collect();
        let normalized_count = items.len();

        let unique = dedup.retain_unseen(items);

        debug!(
            "{}: 候选 {}, 相关 {}, 有效链接 {}, 去重后 {}",
            source.name,
            total,
            relevant_count,
            normalized_count,
            unique.len()
        );

        unique
    }
}

/// 计算运行日期 `YYYY-MM-DD`
///
/// 调度器通常运行在UTC，日期按配置的时区偏移计算；偏移无效时使用UTC
pub fn run_date(utc_offset_hours: i32) -> String {
    let offset = utc_offset_hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());

    Utc::now().with_timezone(&offset).format("%Y-%m-%d").to_string()
}

/// 执行一次日报运行
///
/// 先校验推送令牌：令牌缺失时直接返回 `AppError::MissingToken`，不做任何抓取
pub async fn run_daily_digest(settings: Arc<Settings>) -> Result<RunReport, AppError> {
    let token = settings.delivery_token()?;

    let fetcher = Arc::new(ReqwestFetcher::new(&settings.http)?);
    let notifier = Arc::new(PushPlusServiceImpl::new(&settings.push, token)?);
    info!("已配置 {} 个信息源", settings.sources.len());

    let pipeline = DigestPipeline::new(settings.clone(), fetcher, notifier);
    Ok(pipeline.run().await)
}

#[cfg(test)]
#[path = "run_digest_test.rs"]
mod tests;
