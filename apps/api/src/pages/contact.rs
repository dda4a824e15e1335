use serde::Serialize;

use crate::content::ContentStore;
use crate::motion::presets;
use crate::motion::Particle;

/// One way of reaching out. `href` is `None` for plain information
/// such as a location.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    pub href: Option<String>,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPage {
    pub headline: String,
    pub email_href: String,
    pub channels: Vec<ContactChannel>,
    pub resume_url: String,
    pub particles: Vec<Particle>,
}

/// Strips the scheme so the link reads as `github.com/user`.
fn display_url(url: &str) -> String {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}

pub fn build_contact(store: &ContentStore) -> ContactPage {
    let profile = store.profile();

    let mut channels = vec![
        ContactChannel {
            label: "Email".to_string(),
            value: profile.email.clone(),
            href: Some(profile.mailto()),
            icon: "Mail".to_string(),
        },
        ContactChannel {
            label: "Location".to_string(),
            value: profile.location.clone(),
            href: None,
            icon: "MapPin".to_string(),
        },
    ];

    channels.extend(
        store
            .socials()
            .iter()
            .filter(|s| !s.is_email())
            .map(|s| ContactChannel {
                label: s.name.clone(),
                value: display_url(&s.url),
                href: Some(s.url.clone()),
                icon: s.icon.clone(),
            }),
    );

    ContactPage {
        headline: format!("Get in touch with {}", profile.name),
        email_href: profile.mailto(),
        channels,
        resume_url: profile.resume_url.clone(),
        particles: presets::CONTACT.particles(),
    }
}
