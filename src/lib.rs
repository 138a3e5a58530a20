pub mod channels;
pub mod configuration;
pub mod domain;
pub mod subscribe;
pub mod telemetry;
