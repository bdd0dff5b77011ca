// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use eduwatch::config::settings::Settings;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 页面上的一个链接
pub fn anchor(text: &str, href: &str) -> String {
    format!("<li><a href=\"{}\">{}</a></li>", href, text)
}

/// 生成带导航栏和公告列表的页面
pub fn list_page(anchors: &[String]) -> String {
    format!(
        r#"<html><head><meta charset="utf-8"></head><body>
        <div class="nav"><a href="/">首页</a><a href="/more">更多</a></div>
        <ul class="news">{}</ul>
        </body></html>"#,
        anchors.concat()
    )
}

/// 挂载一个返回指定页面的信息源
pub async fn mount_page(server: &MockServer, route: &str, html: String, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// 挂载推送接口
pub async fn mount_push(server: &MockServer, status: u16, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(
            ResponseTemplate::new(status).set_body_string(r#"{"code":200,"msg":"请求成功","data":"abc"}"#),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// 构造指向模拟服务器的配置
///
/// `sources` 为 (名称, 路由, 额外要求的关键词)
pub fn settings_for(
    sources_server: &MockServer,
    push_server: &MockServer,
    sources: &[(&str, &str, Option<&str>)],
    token: Option<&str>,
) -> Settings {
    let mut toml = String::new();
    if let Some(token) = token {
        toml.push_str(&format!("[push]\ntoken = \"{}\"\n", token));
        toml.push_str(&format!("endpoint = \"{}/send\"\n", push_server.uri()));
    } else {
        toml.push_str(&format!("[push]\nendpoint = \"{}/send\"\n", push_server.uri()));
    }
    toml.push_str("timeout_secs = 5\n\n[http]\ntimeout_secs = 5\n\n");

    for (name, route, required) in sources {
        let required = required.map(|k| format!("\"{}\"", k)).unwrap_or_default();
        toml.push_str(&format!(
            "[[sources]]\nname = \"{}\"\nentry_url = \"{}{}\"\nbase_url = \"{}\"\nlist_selector = \"ul.news\"\nrequired_keywords = [{}]\n\n",
            name,
            sources_server.uri(),
            route,
            sources_server.uri(),
            required
        ));
    }

    Settings::from_toml_str(&toml).unwrap()
}

/// 读取推送接口收到的JSON请求体
pub async fn push_bodies(push_server: &MockServer) -> Vec<Value> {
    push_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == "/send")
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}
