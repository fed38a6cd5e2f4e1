//! HTTP surface of the job board: pages, guards and the subscription endpoint.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
