// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 编排一次完整的日报运行
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心实体与过滤、去重、日报构建等领域服务
pub mod domain;

/// 引擎模块
///
/// 实现信息源页面的抓取
pub mod engines;

/// 基础设施模块
///
/// HTML链接提取与推送服务等外部集成
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
