pub mod errors;

pub mod model;
pub mod query;
pub mod client;

pub const SWAPCARD_GRAPHQL_URL: &'static str = "https://app.swapcard.com/api/graphql";
