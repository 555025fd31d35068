pub mod config;
pub mod interfaces;
pub mod ip;
pub mod split;
