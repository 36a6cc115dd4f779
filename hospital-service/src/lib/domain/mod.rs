pub mod appointment;
pub mod auth;
pub mod credential;
pub mod doctor;
pub mod errors;
pub mod patient;
