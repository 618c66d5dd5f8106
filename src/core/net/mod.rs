pub mod host_address;
