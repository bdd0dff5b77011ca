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

use crate::domain::models::source::SourceConfig;
use crate::utils::text_encoding::TextEncodingError;
use async_trait::async_trait;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败（连接错误、超时等）
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// 非成功状态码
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    /// 响应体解码失败
    #[error("Decode failed: {0}")]
    Decode(#[from] TextEncodingError),
}

impl FetchError {
    /// 是否为超时错误
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Request(e) if e.is_timeout())
    }
}

/// 页面抓取特质
///
/// 每次调用只抓取一个信息源，只尝试一次
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取信息源入口页面，返回解码后的HTML
    async fn fetch(&self, source: &SourceConfig) -> Result<String, FetchError>;

    /// 抓取器名称
    fn name(&self) -> &'static str;
}
