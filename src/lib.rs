#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

pub mod cli;
pub mod component;
pub mod config;
pub mod init;
pub mod launcher;
pub mod signal;
pub mod tools;
