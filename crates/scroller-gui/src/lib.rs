mod app;
mod commands;
mod keyboard;
mod message;
mod notifications;
mod style;
mod views;

pub use app::run;
