pub mod configuration;
pub mod db;
pub mod forms;
pub mod helpers;
pub mod models;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod views;
