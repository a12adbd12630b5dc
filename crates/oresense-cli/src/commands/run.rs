use anyhow::Result;
use oresense_core::Config;

/// Open the dashboard TUI.
pub fn run_dashboard(config: &Config) -> Result<()> {
    crate::tui::run_tui(config)
}
