use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use folio_core::theme::ThemeMode;
use folio_core::AppConfig;
use folio_tui::widgets::compose_page;
use folio_tui::App;

/// Reference width used when no terminal is attached
const LAYOUT_WIDTH: u16 = 80;
const LAYOUT_VIEWPORT: u16 = 30;

pub fn run(content_path: Option<PathBuf>) -> Result<()> {
    let portfolio = super::load_portfolio(content_path)?;
    let app = App::new(
        portfolio,
        AppConfig::default(),
        ThemeMode::Light,
        None,
        Instant::now(),
    );

    let composed = compose_page(&app, LAYOUT_WIDTH, LAYOUT_VIEWPORT, Instant::now());

    println!("Sections ({}):\n", composed.layout.sections.len());
    for (i, section) in composed.layout.sections.iter().enumerate() {
        println!(
            "  {} {:<12} rows {}..{}",
            i + 1,
            section.id,
            section.top,
            section.top + section.height
        );
    }
    println!("\nTotal height: {} rows at width {}", composed.layout.total_height, LAYOUT_WIDTH);

    Ok(())
}
