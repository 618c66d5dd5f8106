pub mod echo_dto;
