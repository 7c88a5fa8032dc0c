pub mod assets;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod utils;
pub mod views;
