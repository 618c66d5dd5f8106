pub mod client;
pub mod net;
