// Content store: the static, strongly-typed record set behind every page.
// Loaded and validated once at startup; never mutated afterwards.

pub mod models;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod test_support;

pub use store::ContentStore;
