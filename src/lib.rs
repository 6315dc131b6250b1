
pub mod error;

pub mod service {
    pub mod config_service;
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod convert;
    pub mod detect;
    pub mod excel;
    pub mod file;
    pub mod utils;
}
