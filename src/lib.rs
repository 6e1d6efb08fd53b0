//! Record-management backend for a fitness center: members and the workout
//! sessions they attend, served as a JSON API over PostgreSQL.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
