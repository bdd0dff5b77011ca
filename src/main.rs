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

use eduwatch::application::usecases::run_digest::run_daily_digest;
use eduwatch::config::settings::Settings;
use eduwatch::utils::errors::AppError;
use eduwatch::utils::telemetry;
use std::sync::Arc;
use tracing::{error, info};

/// 主函数
///
/// 由外部调度器每天触发一次；推送令牌缺失时以非零状态退出，
/// 其余情况（包括无更新、推送失败）都以0退出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting eduwatch...");

    // 2. Load configuration
    let settings = Settings::new().map_err(AppError::from).inspect_err(|e| {
        error!("运行中止: {}", e);
    })?;
    let settings = Arc::new(settings);
    info!("Configuration loaded");

    // 3. Run the pipeline
    let report = run_daily_digest(settings).await.inspect_err(|e| {
        error!("运行中止: {}", e);
    })?;

    if !report.failed_sources.is_empty() {
        info!("抓取失败的信息源: {}", report.failed_sources.join(", "));
    }
    info!(
        "运行结束: {} 条资讯, 推送 {}",
        report.digest.item_count(),
        report.delivery
    );

    Ok(())
}
