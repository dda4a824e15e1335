// Project catalog: free-text + tag filtering and the filter tag universe.
// Everything here is a pure function of the immutable project list.

pub mod filter;
pub mod tags;

pub use filter::{run_filter, ProjectQuery, ProjectQueryParams};
pub use tags::tag_universe;
