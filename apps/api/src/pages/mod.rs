// Page view models: one pure builder per route, plus the shared chrome.
// Builders take the content store and return serializable structs; handlers
// only wrap them in the page envelope.

pub mod about;
pub mod cards;
pub mod chrome;
pub mod contact;
pub mod experience;
pub mod handlers;
pub mod home;
pub mod projects;
pub mod stats;
