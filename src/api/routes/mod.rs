//! API route declarations

pub mod echo_routes;
