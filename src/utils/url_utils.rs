// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 将候选链接规范化为绝对URL
///
/// - 以 `/` 开头：拼接为 `base_url + href`
/// - 以 `http` 开头：原样保留
/// - 其他形式（`javascript:`、`#anchor`、空串等）：丢弃
///
/// 结果还必须是字面合法的 `http(s)://host...` 绝对URL，否则同样丢弃；
/// 含内部空白或控制字符的链接无法原样放进markdown，也一并丢弃
pub fn normalize_link(href: &str, base_url: &str) -> Option<String> {
    let href = href.trim();
    if href.chars().any(|c| c.is_ascii_whitespace() || c.is_control()) {
        return None;
    }

    let candidate = if href.starts_with('/') {
        format!("{}{}", base_url, href)
    } else if href.starts_with("http") {
        href.to_string()
    } else {
        return None;
    };

    let url = Url::parse(&candidate).ok()?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return None;
    }

    // 解析器会容忍 `https:/host` 这类缺斜杠的写法，原样输出前要求字面上有 `://`
    let authority_start = url.scheme().len() + 3;
    let has_authority = candidate
        .get(..authority_start)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(&format!("{}://", url.scheme())));
    if !has_authority || candidate.contains('\\') {
        return None;
    }

    Some(candidate)
}
