//! Navigation, footer and page metadata shared by every page response.

use serde::Serialize;

use crate::content::ContentStore;

/// Top-level routes of the site, in navigation order.
pub const NAVIGATION: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Projects", "/projects"),
    ("About", "/about"),
    ("Experience", "/experience"),
    ("Contact", "/contact"),
];

#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    /// `"<page> | <site name>"`, or just the site name for the home page.
    pub fn for_page(store: &ContentStore, page: Option<&str>, description: Option<&str>) -> Self {
        let site = store.site();
        let title = match page {
            Some(page) => format!("{page} | {}", site.name),
            None => site.name.clone(),
        };
        Self {
            title,
            description: description.unwrap_or(&site.description).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterLink {
    pub name: String,
    pub url: String,
    pub icon: String,
    /// Email links copy the address instead of opening a new tab.
    pub is_email: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub name: String,
    pub about_short: String,
    pub email: String,
    pub quick_links: Vec<NavItem>,
    pub socials: Vec<FooterLink>,
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Chrome {
    pub brand_initials: String,
    pub navigation: Vec<NavItem>,
    pub footer: Footer,
}

/// The route is active on exact match, or on prefix match for nested routes
/// (`/projects/<slug>` keeps "Projects" highlighted).
fn is_active(href: &str, current: &str) -> bool {
    if href == "/" {
        current == "/"
    } else {
        current == href || current.starts_with(&format!("{href}/"))
    }
}

pub fn build_chrome(store: &ContentStore, current_path: &str, year: i32) -> Chrome {
    let profile = store.profile();

    let navigation: Vec<NavItem> = NAVIGATION
        .iter()
        .map(|&(name, href)| NavItem {
            name,
            href,
            active: is_active(href, current_path),
        })
        .collect();

    let quick_links = navigation
        .iter()
        .filter(|item| item.href != "/")
        .cloned()
        .collect();

    let socials = store
        .socials()
        .iter()
        .map(|s| FooterLink {
            name: s.name.clone(),
            url: s.url.clone(),
            icon: s.icon.clone(),
            is_email: s.is_email(),
        })
        .collect();

    Chrome {
        brand_initials: profile.initials(),
        navigation,
        footer: Footer {
            name: profile.name.clone(),
            about_short: profile.about_short.clone(),
            email: profile.email.clone(),
            quick_links,
            socials,
            copyright: format!("© {year} {}. All rights reserved.", profile.name),
        },
    }
}

/// Envelope returned by every page endpoint.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub meta: PageMeta,
    pub chrome: Chrome,
    pub content: T,
}
