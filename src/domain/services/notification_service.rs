// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::fmt;

/// 推送结果
///
/// 推送是尽力而为的：失败只记录日志，不向调用方抛出错误。
/// 重试交给外部调度器的下一次运行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// 推送接口返回成功状态码
    Delivered { status: u16, body: String },
    /// 推送接口返回非成功状态码
    Rejected { status: u16, body: String },
    /// 网络错误或超时
    Failed { reason: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryOutcome::Delivered { status, .. } => write!(f, "delivered ({})", status),
            DeliveryOutcome::Rejected { status, .. } => write!(f, "rejected ({})", status),
            DeliveryOutcome::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}

/// 推送服务特质
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// 发送一条推送
    ///
    /// # 参数
    ///
    /// * `title` - 推送标题
    /// * `content` - 推送正文（Markdown）
    ///
    /// # 返回值
    ///
    /// 推送结果，任何失败都体现在返回值里而不是错误里
    async fn send(&self, title: &str, content: &str) -> DeliveryOutcome;
}
