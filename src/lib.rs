//! Decora Interiors back-office API
//!
//! Public JSON endpoints for the marketing site (portfolio, reviews, team,
//! contact form) and an admin back-office behind JWT auth.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod store;
pub mod validate;
