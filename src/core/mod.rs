//! Configuration and the data types shared by the API and Slack layers

pub mod config;
pub mod models;
