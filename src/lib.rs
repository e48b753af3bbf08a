pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod upstream;
