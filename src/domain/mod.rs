// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：候选链接、条目、日报和信息源配置
/// - 服务（services）：相关性过滤、去重、日报构建和推送接口
///
/// 领域层不依赖于任何外部实现。
pub mod models;
pub mod services;
