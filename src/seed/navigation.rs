//! Navigation shell seed data.

use once_cell::sync::Lazy;

use crate::domain::prd::NavigationItem;

fn item(id: &str, label: &str, path: &str, icon: &str) -> NavigationItem {
    NavigationItem {
        id: id.to_string(),
        label: label.to_string(),
        path: path.to_string(),
        icon: icon.to_string(),
    }
}

pub static NAVIGATION: Lazy<Vec<NavigationItem>> = Lazy::new(|| {
    vec![
        item("overview", "Overview", "/", "home"),
        item("introduction", "Introduction", "/introduction", "info"),
        item("user-stories", "User Stories", "/user-stories", "users"),
        item("features", "Features", "/features", "layers"),
        item("technical", "Technical", "/technical", "code"),
        item("ui-ux", "UI/UX", "/ui-ux", "palette"),
        item("monetization", "Monetization", "/monetization", "dollar-sign"),
        item("roadmap", "Roadmap", "/roadmap", "map"),
        item("metrics", "Metrics", "/metrics", "bar-chart"),
    ]
});
