//! UI components for the portfolio page.

mod app;
mod classic;
mod controls;
mod loading;
mod sections;
mod sidebar;
mod tabbed;
mod ticker;

pub use app::*;
pub use classic::*;
pub use controls::*;
pub use loading::*;
pub use sections::*;
pub use sidebar::*;
pub use tabbed::*;
pub use ticker::*;
