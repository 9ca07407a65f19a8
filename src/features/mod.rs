pub mod auth;
pub mod components;
pub mod projects;
pub mod quotas;
pub mod rate_limits;
pub mod users;
