//! Data Cleaner Studio - Desktop GUI Application
//!
//! A desktop client for the tabular-data cleaning service: upload a
//! spreadsheet, pick and order the columns to keep, let the server clean
//! the file, and download the result as semicolon- or comma-separated CSV.
//!
//! Built with Iced using the Elm architecture (State, Message, Update, View).

mod app;
mod handler;
mod message;
mod service;
mod settings;
mod state;
mod theme;
mod view;

use iced::window;
use iced::Size;

use app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Data Cleaner Studio");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(1100.0, 760.0),
            min_size: Some(Size::new(900.0, 600.0)),
            ..Default::default()
        })
        .run()
}
