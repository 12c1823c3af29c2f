use std::path::PathBuf;

use anyhow::Result;

use folio_core::anim::rotator::Rotator;
use folio_core::AppConfig;

/// Validate content and configuration without starting the TUI. Warnings
/// (like non-numeric stat targets) are logged by validation itself.
pub fn run(config: &AppConfig, content_path: Option<PathBuf>) -> Result<()> {
    let portfolio = super::load_portfolio(content_path)?;
    portfolio.validate()?;

    println!("content: ok");
    println!("  name: {}", portfolio.name);
    println!("  roles: {}", portfolio.roles.len());
    let countable = portfolio
        .stats
        .iter()
        .filter(|s| Rotator::parse_target(&s.target).is_some())
        .count();
    println!("  stats: {} ({} animated)", portfolio.stats.len(), countable);
    println!(
        "  skills: {} in {} categories",
        portfolio.skills.len(),
        portfolio.skill_categories.len()
    );
    println!("  projects: {}", portfolio.projects.len());
    println!("  experience: {}", portfolio.experience.len());

    let config_path = AppConfig::config_path();
    if config_path.exists() {
        println!("config: {}", config_path.display());
    } else {
        println!("config: defaults (no file at {})", config_path.display());
    }
    println!(
        "  tick {}ms, animation {}fps, slideshow every {}ms",
        config.ui.tick_rate_ms, config.ui.animation_fps, config.slideshow.interval_ms
    );

    Ok(())
}
