// src/application/ports/mod.rs
pub mod health;

pub type HealthCheckPort = dyn health::HealthCheck;
