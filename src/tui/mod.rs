//! Interactive converter form.

mod app;
mod events;
mod layout;
mod picker;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;
use tracing::info;

use self::terminal::TerminalManager;
use crate::catalog::{Category, UnitCatalog};
use crate::clipboard::SystemClipboard;

/// Run the converter form until the user quits
pub fn run_interactive<C: UnitCatalog>(catalog: C, category: Option<Category>) -> Result<()> {
    let mut app = App::new(catalog, Box::new(SystemClipboard::new()));
    if let Some(category) = category {
        app = app.with_category(category);
    }

    info!(?category, "starting interactive session");
    let mut manager = TerminalManager::new()?;
    let res = app.run(manager.terminal_mut());
    manager.restore()?;

    info!(saved = app.session().history().len(), "interactive session ended");
    res
}
