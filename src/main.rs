//! Portfolio Frontend Entry Point

mod models;
mod dates;
mod catalog;
mod view_model;
mod routes;
mod contact;
mod logging;
mod context;
mod store;
mod markdown;
mod components;
mod pages;
mod app;

use app::{App, LoadError};
use leptos::prelude::*;
use models::Portfolio;

fn main() {
    console_error_panic_hook::set_once();
    // Default level until the document says otherwise
    logging::init("info");

    match Portfolio::embedded() {
        Ok(portfolio) => {
            logging::init(&portfolio.site.log_level);
            log::info!(
                "[APP] mounting portfolio of {} with {} projects",
                portfolio.profile.name,
                portfolio.projects.len()
            );
            mount_to_body(move || view! { <App portfolio=portfolio.clone() /> });
        }
        Err(err) => {
            log::error!("[APP] {}", err);
            let message = err.to_string();
            mount_to_body(move || view! { <LoadError message=message.clone() /> });
        }
    }
}
