// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::source::{default_sources, SourceConfig};
use crate::utils::errors::AppError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// 推送令牌所在的环境变量
pub const TOKEN_ENV_VAR: &str = "PUSHPLUS_TOKEN";

/// 应用程序配置设置
///
/// 启动时构建一次，之后以引用传递给各组件，组件本身不读取环境变量
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 抓取配置
    pub http: HttpSettings,
    /// 推送配置
    pub push: PushSettings,
    /// 关键词过滤配置
    pub filter: FilterSettings,
    /// 日报配置
    pub digest: DigestSettings,
    /// 信息源列表（按配置顺序输出）
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceConfig>,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
    /// 请求使用的 User-Agent，部分站点会拒绝默认客户端
    pub user_agent: String,
    /// 强制使用的响应编码，`auto` 表示自动检测
    pub encoding: String,
}

/// 推送配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct PushSettings {
    /// 推送接口地址
    pub endpoint: String,
    /// 推送令牌
    pub token: Option<String>,
    /// 正文格式提示
    pub template: String,
    /// 推送请求超时时间（秒）
    pub timeout_secs: u64,
    /// 日报标题
    pub title: String,
}

/// 关键词过滤配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FilterSettings {
    /// 基础关键词，命中其一即视为相关
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    /// 标题最短字符数
    pub min_title_chars: usize,
}

/// 日报配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DigestSettings {
    /// 每个信息源最多展示的条目数
    pub max_items_per_source: usize,
    /// 计算运行日期时使用的UTC偏移（小时）
    pub utc_offset_hours: i32,
    /// 正文末尾的提示语
    pub footer: String,
}

fn default_keywords() -> Vec<String> {
    [
        "高考", "中考", "招生", "分数线", "录取", "报名", "志愿", "考试", "单招", "成绩", "招考",
    ]
    .iter()
    .map(|k| k.to_string())
    .collect()
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加内置默认值、`config/default.toml`、`config/{APP_ENVIRONMENT}.toml`
    /// 和 `EDUWATCH__*` 环境变量；推送令牌从 `PUSHPLUS_TOKEN` 读取
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("EDUWATCH").separator("__"))
            .set_override_option("push.token", std::env::var(TOKEN_ENV_VAR).ok())?
            .build()?
            .try_deserialize()
    }

    /// 从TOML文本构建配置，不读取任何环境变量
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("http.timeout_secs", 10)?
            .set_default(
                "http.user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            )?
            .set_default("http.encoding", "utf-8")?
            .set_default("push.endpoint", "http://www.pushplus.plus/send")?
            .set_default("push.template", "markdown")?
            .set_default("push.timeout_secs", 15)?
            .set_default("push.title", "河南招考日报")?
            .set_default("filter.min_title_chars", 5)?
            .set_default("digest.max_items_per_source", 15)?
            .set_default("digest.utc_offset_hours", 8)?
            .set_default(
                "digest.footer",
                "信息来自各官方网站实时抓取，请以官方发布为准。",
            )
    }

    /// 获取推送令牌
    ///
    /// 令牌缺失或为空白时返回 `AppError::MissingToken`
    pub fn delivery_token(&self) -> Result<&str, AppError> {
        self.push
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MissingToken)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
