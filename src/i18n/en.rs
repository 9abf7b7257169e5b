//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Statscout");
    m.insert(Key::AppTagline, "Look up any player's Bedwars stats");

    // Search
    m.insert(Key::SearchPlaceholder, "Search for a player...");
    m.insert(Key::SearchButton, "Search");
    m.insert(Key::SearchNoResults, "No players found matching");
    m.insert(Key::SearchLoading, "Searching...");

    // Player page
    m.insert(Key::PlayerTitle, "Player");
    m.insert(Key::PlayerRoute, "Route");
    m.insert(
        Key::PlayerStatsUnavailable,
        "Detailed statistics are served by the web dashboard.",
    );

    // Navigation Controls
    m.insert(Key::Back, "Back");

    // Backend status
    m.insert(Key::BackendChecking, "Checking backend...");
    m.insert(Key::BackendOnline, "Backend online");
    m.insert(Key::BackendOffline, "Backend is not responding");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
