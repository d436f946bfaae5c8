// Library exports for Battlesnake bot
// This allows the replay tool and other utilities to use the core bot logic

#[macro_use]
extern crate rocket;

pub mod bot;
pub mod candidates;
pub mod config;
pub mod debug_logger;
pub mod decision;
pub mod handler;
pub mod replay;
pub mod safety;
pub mod types;
