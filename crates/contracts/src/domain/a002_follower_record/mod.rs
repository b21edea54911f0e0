pub mod aggregate;

pub use aggregate::{FollowerFeed, FollowerRecord};
