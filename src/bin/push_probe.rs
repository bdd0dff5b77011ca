// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use eduwatch::config::settings::Settings;
use eduwatch::domain::services::notification_service::{DeliveryOutcome, NotificationService};
use eduwatch::infrastructure::services::pushplus_service_impl::PushPlusServiceImpl;
use eduwatch::utils::errors::AppError;
use eduwatch::utils::telemetry;
use tracing::{error, info, warn};

/// 推送通道诊断
///
/// 发送一条固定的测试消息并记录HTTP状态码和接口原始回复，
/// 用于排查运行环境的出口网络是否被推送接口拦截
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let settings = Settings::new().map_err(AppError::from)?;
    let token = settings.delivery_token().inspect_err(|e| {
        error!("{}", e);
    })?;

    let service = PushPlusServiceImpl::new(&settings.push, token)?;
    info!("--- 推送通道测试开始: {} ---", settings.push.endpoint);

    match service
        .send(
            "【推送通道测试】",
            "如果这条消息没有收到，说明运行环境的出口IP可能被推送接口暂时拦截。",
        )
        .await
    {
        DeliveryOutcome::Delivered { status, body } => {
            info!("HTTP 状态码: {}", status);
            info!("接口原始回复: {}", body);
        }
        DeliveryOutcome::Rejected { status, body } => {
            warn!("HTTP 状态码: {}", status);
            warn!("接口原始回复: {}", body);
        }
        DeliveryOutcome::Failed { reason } => {
            error!("网络失败，连接错误或超时: {}", reason);
        }
    }

    info!("--- 推送通道测试结束 ---");
    Ok(())
}
