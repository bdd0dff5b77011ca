// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use thiserror::Error;
use tracing::{debug, warn};

/// 自动检测编码时使用的标签
pub const AUTO_DETECT: &str = "auto";

/// 文本编码处理错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextEncodingError {
    #[error("无效的编码格式: {0}")]
    InvalidEncoding(String),
}

/// 按配置的编码强制解码响应体
///
/// 各信息源的 `Content-Type` 编码声明不可靠，因此忽略响应头，
/// 直接按指定编码解码；标签为 `auto` 时由 chardetng 猜测编码。
/// 非法字节会被替换为 U+FFFD
///
/// # 参数
///
/// * `bytes` - 原始响应体
/// * `label` - 编码标签，例如 `utf-8`、`gbk`、`auto`
pub fn decode_with_label(bytes: &[u8], label: &str) -> Result<String, TextEncodingError> {
    let encoding = resolve_encoding(bytes, label)?;
    let (text, actual, had_errors) = encoding.decode(bytes);

    if had_errors {
        warn!("按 {} 解码时遇到非法字节，已替换", actual.name());
    }

    Ok(text.into_owned())
}

fn resolve_encoding(bytes: &[u8], label: &str) -> Result<&'static Encoding, TextEncodingError> {
    if label.trim().eq_ignore_ascii_case(AUTO_DETECT) {
        let mut detector = EncodingDetector::new();
        detector.feed(bytes, true);
        let encoding = detector.guess(None, true);
        debug!("检测到编码: {}", encoding.name());
        return Ok(encoding);
    }

    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| TextEncodingError::InvalidEncoding(label.to_string()))
}
