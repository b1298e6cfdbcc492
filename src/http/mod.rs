pub mod cli;
pub mod common;
pub mod error;
pub mod images;
pub mod pages;
pub mod posts;
