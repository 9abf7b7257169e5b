//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Statscout");
    m.insert(Key::AppTagline, "查询任意玩家的起床战争数据");

    // Search
    m.insert(Key::SearchPlaceholder, "搜索玩家...");
    m.insert(Key::SearchButton, "搜索");
    m.insert(Key::SearchNoResults, "未找到匹配的玩家");
    m.insert(Key::SearchLoading, "搜索中...");

    // Player page
    m.insert(Key::PlayerTitle, "玩家");
    m.insert(Key::PlayerRoute, "路由");
    m.insert(Key::PlayerStatsUnavailable, "详细数据请在网页面板中查看。");

    // Navigation Controls
    m.insert(Key::Back, "返回");

    // Backend status
    m.insert(Key::BackendChecking, "正在检查后端...");
    m.insert(Key::BackendOnline, "后端在线");
    m.insert(Key::BackendOffline, "后端无响应");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
