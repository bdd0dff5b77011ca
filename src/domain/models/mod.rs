// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型
///
/// 单次运行内创建和丢弃的实体：候选链接、条目、日报与信息源配置
pub mod candidate;
pub mod digest;
pub mod item;
pub mod source;
