//! RS Finance Service Backend Library
//!
//! This library exports the core modules for the RS Finance Service backend server.

pub mod application;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod notification;
pub mod organization;
pub mod routes;
pub mod state;
