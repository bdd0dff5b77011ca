// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 运行级错误类型
///
/// 只有配置类错误会中止运行；抓取和推送失败都在各自的边界内消化
#[derive(Error, Debug)]
pub enum AppError {
    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("未设置推送令牌 PUSHPLUS_TOKEN")]
    MissingToken,

    #[error("HTTP客户端初始化失败: {0}")]
    HttpClient(#[from] reqwest::Error),
}
