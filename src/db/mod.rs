pub mod alerts;
pub mod contractors;
pub mod payments;
pub mod projects;
pub mod recent_activity;
pub mod seed;
pub mod users;
