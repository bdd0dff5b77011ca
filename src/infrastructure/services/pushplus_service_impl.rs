// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::PushSettings;
use crate::domain::services::notification_service::{DeliveryOutcome, NotificationService};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info, warn};

/// 推送请求体
#[derive(Debug, Serialize)]
struct PushPayload<'a> {
    token: &'a str,
    title: &'a str,
    content: &'a str,
    /// 正文格式提示，`markdown` 表示由客户端渲染为富文本
    template: &'a str,
}

/// PushPlus 推送服务实现
///
/// 每次调用只发一个POST请求，不重试
pub struct PushPlusServiceImpl {
    /// HTTP 客户端
    client: reqwest::Client,
    /// 推送接口地址
    endpoint: String,
    /// 推送令牌
    token: String,
    /// 正文格式提示
    template: String,
}

impl PushPlusServiceImpl {
    /// 创建新的推送服务实现
    ///
    /// # 参数
    ///
    /// * `settings` - 推送配置
    /// * `token` - 已校验的推送令牌
    pub fn new(settings: &PushSettings, token: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            token: token.to_string(),
            template: settings.template.clone(),
        })
    }
}

#[async_trait]
impl NotificationService for PushPlusServiceImpl {
    async fn send(&self, title: &str, content: &str) -> DeliveryOutcome {
        let payload = PushPayload {
            token: &self.token,
            title,
            content,
            template: &self.template,
        };

        let response = match self.client.post(&self.endpoint).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("推送失败，连接错误或超时: {}", e);
                return DeliveryOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("读取推送响应失败: {}", e);
                String::new()
            }
        };

        if (200..300).contains(&status) {
            info!("推送完成: HTTP {}, 响应: {}", status, body);
            DeliveryOutcome::Delivered { status, body }
        } else {
            warn!("推送接口返回非成功状态: HTTP {}, 响应: {}", status, body);
            DeliveryOutcome::Rejected { status, body }
        }
    }
}
