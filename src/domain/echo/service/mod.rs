pub mod echo_service;
