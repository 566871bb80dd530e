mod setup;

pub use setup::{cleanup_terminal_state as cleanup, setup_terminal as setup};

pub type Tui = ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>;
