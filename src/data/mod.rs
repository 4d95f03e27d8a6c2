pub mod activity;
pub mod activities_store;
pub mod json_responses;
pub mod seed;
