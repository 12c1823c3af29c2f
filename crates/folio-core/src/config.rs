use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub slideshow: SlideshowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Optional portfolio content file (JSON); built-in content when absent
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle event poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while animations are active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Tunables for scrolling, header behavior and the rotator/observer layer.
///
/// Distances are in terminal rows, durations in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Minimum scroll delta sampled by the header logic; smaller moves are noise
    #[serde(default = "default_scroll_delta_min")]
    pub scroll_delta_min: u16,
    /// Scroll position below which the header never hides
    #[serde(default = "default_header_hide_min")]
    pub header_hide_min: u16,
    /// Rows kept between the viewport top and a navigated section
    #[serde(default = "default_nav_offset")]
    pub nav_offset: u16,
    /// Programmatic scroll duration
    #[serde(default = "default_nav_scroll_ms")]
    pub nav_scroll_ms: u64,
    /// Anchor/back-to-top scroll duration
    #[serde(default = "default_anchor_scroll_ms")]
    pub anchor_scroll_ms: u64,
    /// Delay after a programmatic scroll before ambient handling resumes
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Window in which rapid navigations coalesce into one history entry
    #[serde(default = "default_nav_cooldown_ms")]
    pub nav_cooldown_ms: u64,
    /// Rotator animation duration
    #[serde(default = "default_rotator_ms")]
    pub rotator_ms: u64,
    /// Per-sibling stagger when a section's effects trigger together
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
    /// Ambient scroll sampling interval (one display frame)
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,
    /// Resize re-layout quiet period
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    /// Visible-ratio threshold for general reveal animations
    #[serde(default = "default_observer_threshold")]
    pub observer_threshold: f64,
    /// Bottom margin (rows) subtracted from the viewport for reveals
    #[serde(default = "default_observer_margin")]
    pub observer_margin: u16,
    /// Visible-ratio threshold for rotator triggers
    #[serde(default = "default_rotator_threshold")]
    pub rotator_threshold: f64,
    /// Bottom margin (rows) for rotator triggers
    #[serde(default = "default_rotator_margin")]
    pub rotator_margin: u16,
    /// Rows past either viewport edge before an effect resets for replay
    #[serde(default = "default_reset_margin")]
    pub reset_margin: u16,
    /// Scroll position past which the back-to-top control shows
    #[serde(default = "default_back_to_top_min")]
    pub back_to_top_min: u16,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            scroll_delta_min: default_scroll_delta_min(),
            header_hide_min: default_header_hide_min(),
            nav_offset: default_nav_offset(),
            nav_scroll_ms: default_nav_scroll_ms(),
            anchor_scroll_ms: default_anchor_scroll_ms(),
            settle_ms: default_settle_ms(),
            nav_cooldown_ms: default_nav_cooldown_ms(),
            rotator_ms: default_rotator_ms(),
            stagger_ms: default_stagger_ms(),
            throttle_ms: default_throttle_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            observer_threshold: default_observer_threshold(),
            observer_margin: default_observer_margin(),
            rotator_threshold: default_rotator_threshold(),
            rotator_margin: default_rotator_margin(),
            reset_margin: default_reset_margin(),
            back_to_top_min: default_back_to_top_min(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowConfig {
    /// Autoplay interval in milliseconds
    #[serde(default = "default_slide_interval_ms")]
    pub interval_ms: u64,
    /// Fade transition duration
    #[serde(default = "default_slide_fade_ms")]
    pub fade_ms: u64,
    /// Autoplay resume cooldown after a manual transition
    #[serde(default = "default_slide_resume_ms")]
    pub resume_cooldown_ms: u64,
    /// Minimum horizontal drag (columns) recognized as a swipe
    #[serde(default = "default_min_swipe")]
    pub min_swipe_cols: u16,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_slide_interval_ms(),
            fade_ms: default_slide_fade_ms(),
            resume_cooldown_ms: default_slide_resume_ms(),
            min_swipe_cols: default_min_swipe(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_tick_rate() -> u64 {
    250
}
fn default_animation_fps() -> u16 {
    60
}
fn default_scroll_delta_min() -> u16 {
    1
}
fn default_header_hide_min() -> u16 {
    4
}
fn default_nav_offset() -> u16 {
    2
}
fn default_nav_scroll_ms() -> u64 {
    800
}
fn default_anchor_scroll_ms() -> u64 {
    1000
}
fn default_settle_ms() -> u64 {
    200
}
fn default_nav_cooldown_ms() -> u64 {
    1500
}
fn default_rotator_ms() -> u64 {
    2000
}
fn default_stagger_ms() -> u64 {
    150
}
fn default_throttle_ms() -> u64 {
    16
}
fn default_resize_debounce_ms() -> u64 {
    250
}
fn default_observer_threshold() -> f64 {
    0.3
}
fn default_observer_margin() -> u16 {
    3
}
fn default_rotator_threshold() -> f64 {
    0.5
}
fn default_rotator_margin() -> u16 {
    6
}
fn default_reset_margin() -> u16 {
    12
}
fn default_back_to_top_min() -> u16 {
    20
}
fn default_slide_interval_ms() -> u64 {
    5000
}
fn default_slide_fade_ms() -> u64 {
    800
}
fn default_slide_resume_ms() -> u64 {
    3000
}
fn default_min_swipe() -> u16 {
    5
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &PathBuf) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Configuration file path: ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Persisted theme preference path: ~/.config/folio/theme
    pub fn theme_path() -> PathBuf {
        config_dir().join("theme")
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("folio")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_motion_config() {
        let motion = MotionConfig::default();
        assert_eq!(motion.nav_scroll_ms, 800);
        assert_eq!(motion.settle_ms, 200);
        assert_eq!(motion.stagger_ms, 150);
        assert!((motion.observer_threshold - 0.3).abs() < f64::EPSILON);
        assert!((motion.rotator_threshold - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_config_parses_with_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [slideshow]
            interval_ms = 8000
            "#,
        )
        .unwrap();
        assert_eq!(config.slideshow.interval_ms, 8000);
        assert_eq!(config.slideshow.fade_ms, 800);
        assert_eq!(config.motion.rotator_ms, 2000);
    }
}
