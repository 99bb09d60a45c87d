mod site;

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use pagekit::config::ConfigError;
use pagekit::logging::{self, LogError};
use pagekit::prelude::*;
use simplelog::LevelFilter;
use thiserror::Error;

const DEFAULT_LOG: &str = "pagekit-demo.log";

#[derive(Debug, Error)]
enum DemoError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Log(#[from] LogError),
}

/// `PAGEKIT_CONFIG` if set, defaults otherwise.
fn load_config() -> Result<PageConfig, DemoError> {
    let Some(path) = env::var_os("PAGEKIT_CONFIG").map(PathBuf::from) else {
        return Ok(PageConfig::for_locale(Locale::Portuguese));
    };
    let json = fs::read_to_string(&path).map_err(|source| DemoError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    log::info!("[demo] config from {}", path.display());
    Ok(PageConfig::from_json(&json)?)
}

fn classes_of(page: &Page, id: &str) -> String {
    page.document()
        .get(id)
        .map(|el| el.classes.join(" "))
        .unwrap_or_default()
}

fn run() -> Result<(), DemoError> {
    let log_path = env::var("PAGEKIT_LOG").unwrap_or_else(|_| DEFAULT_LOG.to_string());
    logging::init_file(&log_path, LevelFilter::Debug)?;

    let config = load_config()?;
    let clock = VirtualClock::new();
    let mut page = Page::with_clock(site::clinic_page(), clock.clone());
    let behaviors = page.install_defaults(&config)?;
    println!("attached {} behaviors", behaviors.len());

    let scroll_top = page
        .document()
        .query_selector("button.scroll-to-top")
        .ok()
        .flatten()
        .unwrap_or_default();

    // Browse down the page
    for y in [120, 400, 1200] {
        page.scroll_window_to(y);
        let faded = page.document().query_selector_all(".fade-in").unwrap_or_default();
        println!(
            "scroll {y:>5}: header [{}], back-to-top [{}], faded {faded:?}",
            classes_of(&page, "header"),
            classes_of(&page, &scroll_top),
        );
    }

    // Open the mobile menu and follow a link
    page.document_mut().toggle_class("mobileMenu", "show", true);
    page.dispatch(Event::CollapseShown {
        target: "mobileMenu".into(),
    });
    while page.pending_timers() > 0 {
        page.run_due_timers();
        clock.advance(config.mobile_menu.stagger());
    }
    let outcome = page.click("link-contact");
    println!(
        "menu link: prevented={}, menu [{}], scrolled to {}",
        outcome.default_prevented,
        classes_of(&page, "mobileMenu"),
        page.document().viewport().scroll_y()
    );
    // A browser host would animate these
    for request in page.document_mut().viewport_mut().take_requests() {
        println!("  scroll request: {request:?}");
    }

    // An incomplete booking is refused
    page.type_into("email", "ana@");
    let outcome = page.submit("booking");
    println!(
        "submit #1: prevented={}, focus={:?}",
        outcome.default_prevented,
        page.document().focused()
    );
    for feedback in page.document().query_selector_all(".invalid-feedback").unwrap_or_default() {
        if let Some(el) = page.document().get(&feedback) {
            println!("  {}: {}", el.get_attr("data-feedback-for").unwrap_or("?"), el.text_content());
        }
    }

    // Fix it and book
    page.type_into("name", "Ana Souza");
    page.type_into("email", "ana@example.com");
    let outcome = page.submit("booking");
    println!(
        "submit #2: prevented={}, button [{}]",
        outcome.default_prevented,
        classes_of(&page, "book")
    );

    clock.advance(config.button_loading.fallback() + Duration::from_millis(1));
    let fired = page.run_due_timers();
    println!(
        "after {:?}: {fired} timers fired, button [{}]",
        config.button_loading.fallback(),
        classes_of(&page, "book")
    );

    page.teardown();
    println!("log written to {log_path}");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
