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

use crate::config::settings::HttpSettings;
use crate::domain::models::source::SourceConfig;
use crate::engines::traits::{FetchError, PageFetcher};
use crate::utils::text_encoding;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::debug;

/// 抓取引擎
///
/// 基于reqwest实现的页面抓取，带超时和浏览器User-Agent，
/// 并忽略响应头中的编码声明、按配置强制解码
pub struct ReqwestFetcher {
    client: reqwest::Client,
    encoding: String,
}

impl ReqwestFetcher {
    /// 创建新的抓取引擎
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取配置
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestFetcher)` - 创建成功
    /// * `Err(reqwest::Error)` - HTTP客户端构建失败
    pub fn new(settings: &HttpSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            encoding: settings.encoding.clone(),
        })
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, source: &SourceConfig) -> Result<String, FetchError> {
        let start = Instant::now();
        let response = self.client.get(&source.entry_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: source.entry_url.clone(),
            });
        }

        let bytes = response.bytes().await?;
        let html = text_encoding::decode_with_label(&bytes, &self.encoding)?;

        debug!(
            "抓取 {} 完成: {} 字节, 耗时 {} ms",
            source.name,
            bytes.len(),
            start.elapsed().as_millis()
        );

        Ok(html)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
