pub mod browser_screen;
pub mod character_grid;
pub mod episode_list;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use browser_screen::{BrowserScreen, BrowserScreenProps};
pub use character_grid::{CharacterGrid, CharacterGridProps, SELECT_PROMPT};
pub use episode_list::{EpisodeList, EpisodeListProps};
