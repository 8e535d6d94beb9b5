pub mod cli;
pub mod framework;
pub mod resolver;
