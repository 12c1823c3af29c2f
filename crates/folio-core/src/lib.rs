pub mod anim;
pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod observe;
pub mod page;
pub mod slideshow;
pub mod theme;

pub use config::{AppConfig, MotionConfig, SlideshowConfig};
pub use content::Portfolio;
pub use error::{Error, Result};
pub use page::{PageController, PageLayout};
pub use theme::ThemeMode;
