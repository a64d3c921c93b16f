pub mod cost;
pub mod plan;
pub mod prayer;
pub mod quiz;
pub mod request;
pub mod token_count;
pub mod upsell;
