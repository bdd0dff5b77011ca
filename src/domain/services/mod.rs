// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 相关性过滤（relevance_filter）：关键词与标题长度策略
/// - 去重（deduplicator）：按规范化URL去重
/// - 日报构建（digest_builder）：截断、分组与Markdown渲染
/// - 推送服务（notification_service）：推送接口特质与推送结果
pub mod deduplicator;
pub mod digest_builder;
pub mod notification_service;
pub mod relevance_filter;
