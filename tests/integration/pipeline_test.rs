// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::*;
use eduwatch::application::usecases::run_digest::{run_daily_digest, DigestPipeline};
use eduwatch::domain::services::notification_service::DeliveryOutcome;
use eduwatch::engines::reqwest_engine::ReqwestFetcher;
use eduwatch::infrastructure::services::pushplus_service_impl::PushPlusServiceImpl;
use eduwatch::utils::errors::AppError;
use std::sync::Arc;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_end_to_end_digest_is_pushed_once() {
    let sources = MockServer::start().await;
    let push = MockServer::start().await;

    mount_page(
        &sources,
        "/a",
        list_page(&[
            anchor("2025年高考分数线发布通知", "/a/123"),
            anchor("首页", "/"),
        ]),
        1,
    )
    .await;
    mount_page(
        &sources,
        "/b",
        list_page(&[anchor("关于2025年中考报名工作的通知", "/b/7")]),
        1,
    )
    .await;
    mount_push(&push, 200, 1).await;

    let settings = settings_for(
        &sources,
        &push,
        &[("考试院", "/a", None), ("教育厅", "/b", None)],
        Some("secret-token"),
    );
    let report = run_daily_digest(Arc::new(settings)).await.unwrap();

    assert!(report.failed_sources.is_empty());
    assert_eq!(report.digest.item_count(), 2);
    assert!(report.delivery.is_delivered());

    let bodies = push_bodies(&push).await;
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];
    assert_eq!(body["token"], "secret-token");
    assert_eq!(body["template"], "markdown");
    assert_eq!(body["title"], report.digest.title.as_str());

    let content = body["content"].as_str().unwrap();
    assert_eq!(content, report.digest.rendered_text);
    assert!(content.contains("### 考试院"));
    assert!(content.contains(&format!(
        "1. [2025年高考分数线发布通知]({}/a/123)",
        sources.uri()
    )));
    assert!(content.contains("### 教育厅"));
    assert!(!content.contains("首页"));
    assert!(content.find("### 考试院").unwrap() < content.find("### 教育厅").unwrap());
}

#[tokio::test]
async fn test_missing_token_aborts_before_any_fetch() {
    let sources = MockServer::start().await;
    let push = MockServer::start().await;

    mount_page(&sources, "/a", list_page(&[]), 0).await;
    mount_push(&push, 200, 0).await;

    let settings = settings_for(&sources, &push, &[("考试院", "/a", None)], None);
    let result = run_daily_digest(Arc::new(settings)).await;

    assert!(matches!(result, Err(AppError::MissingToken)));
    assert!(sources.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_failing_source_degrades_to_empty_group() {
    let sources = MockServer::start().await;
    let push = MockServer::start().await;

    Mock::given(method("GET"))
        .and(wiremock::matchers::path("/down"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&sources)
        .await;
    mount_page(
        &sources,
        "/ok",
        list_page(&[anchor("2025年普通高校招生录取查询", "/ok/1")]),
        1,
    )
    .await;
    mount_push(&push, 200, 1).await;

    let settings = settings_for(
        &sources,
        &push,
        &[("坏源", "/down", None), ("好源", "/ok", None)],
        Some("t"),
    );
    let report = run_daily_digest(Arc::new(settings)).await.unwrap();

    assert_eq!(report.failed_sources, vec!["坏源".to_string()]);
    assert_eq!(report.digest.groups.len(), 1);
    assert_eq!(report.digest.groups[0].source_name, "好源");
}

#[tokio::test]
async fn test_no_results_sends_fallback_once() {
    let sources = MockServer::start().await;
    let push = MockServer::start().await;

    mount_page(&sources, "/a", list_page(&[anchor("更多", "/more")]), 1).await;
    mount_page(&sources, "/b", "<html><body></body></html>".to_string(), 1).await;
    mount_push(&push, 200, 1).await;

    let settings = settings_for(
        &sources,
        &push,
        &[("考试院", "/a", None), ("教育厅", "/b", None)],
        Some("t"),
    );
    let settings = Arc::new(settings);
    let fetcher = Arc::new(ReqwestFetcher::new(&settings.http).unwrap());
    let notifier = Arc::new(PushPlusServiceImpl::new(&settings.push, "t").unwrap());
    let report = DigestPipeline::new(settings, fetcher, notifier)
        .run_for_date("2025-06-25")
        .await;

    assert!(report.digest.is_fallback());
    let bodies = push_bodies(&push).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["content"], "2025-06-25 各信息源均未发现新的招考资讯。");
    assert_eq!(bodies[0]["title"], "河南招考日报 2025-06-25（无更新）");
}

#[tokio::test]
async fn test_cross_source_duplicate_reported_once() {
    let sources = MockServer::start().await;
    let push = MockServer::start().await;

    let shared = format!("{}/a/123", sources.uri());
    mount_page(
        &sources,
        "/a",
        list_page(&[anchor("2025年高考分数线发布通知", "/a/123")]),
        1,
    )
    .await;
    mount_page(
        &sources,
        "/b",
        list_page(&[anchor("转发：2025年高考分数线发布通知", &shared)]),
        1,
    )
    .await;
    mount_push(&push, 200, 1).await;

    let settings = settings_for(
        &sources,
        &push,
        &[("A", "/a", None), ("B", "/b", None)],
        Some("t"),
    );
    let report = run_daily_digest(Arc::new(settings)).await.unwrap();

    assert_eq!(report.digest.item_count(), 1);
    assert_eq!(report.digest.groups[0].items[0].source(), "A");
    assert_eq!(report.digest.groups[0].items[0].url(), shared);
}

#[tokio::test]
async fn test_regional_source_is_narrowed() {
    let sources = MockServer::start().await;
    let push = MockServer::start().await;

    let page = list_page(&[
        anchor("江苏省2025年高考录取分数线", "/js"),
        anchor("河南省2025年高考录取分数线", "/ha"),
    ]);
    mount_page(&sources, "/nation", page, 1).await;
    mount_push(&push, 200, 1).await;

    let settings = settings_for(&sources, &push, &[("阳光高考", "/nation", Some("河南"))], Some("t"));
    let report = run_daily_digest(Arc::new(settings)).await.unwrap();

    assert_eq!(report.digest.item_count(), 1);
    assert_eq!(
        report.digest.groups[0].items[0].title(),
        "河南省2025年高考录取分数线"
    );
}

#[tokio::test]
async fn test_rejected_push_does_not_fail_the_run() {
    let sources = MockServer::start().await;
    let push = MockServer::start().await;

    mount_page(
        &sources,
        "/a",
        list_page(&[anchor("2025年高考志愿填报须知", "/a/1")]),
        1,
    )
    .await;
    mount_push(&push, 503, 1).await;

    let settings = settings_for(&sources, &push, &[("考试院", "/a", None)], Some("t"));
    let report = run_daily_digest(Arc::new(settings)).await.unwrap();

    assert!(matches!(
        report.delivery,
        DeliveryOutcome::Rejected { status: 503, .. }
    ));
}
