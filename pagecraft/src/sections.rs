//! Section list management from the command line.
//!
//! Shows the builder's section list with the visibility each entry resolves
//! to, and toggles sections with the same rules as the editing surface:
//! required sections stay on, changes are saved with a backup.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use pagebuilder::Workspace;

use crate::ctx::AppContext;

/// Section command selector.
#[derive(Subcommand, Clone, Debug)]
pub enum SectionsAction {
    /// Show every section and whether it renders.
    List,
    /// Turn an optional section on or off.
    Toggle {
        /// Section id, e.g. `pricing`.
        id: String,
    },
}

/// Handler for section list operations.
pub struct SectionsHandler;

impl SectionsHandler {
    /// Handles the sections command.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The application context with a loaded site configuration.
    /// * `action` - What to do; `None` lists the sections.
    /// * `file` - Section list file overriding the site configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the files cannot be loaded or saved, or the id is
    /// not in the list.
    pub fn handle_sections(
        ctx: &AppContext,
        action: Option<SectionsAction>,
        file: Option<PathBuf>,
    ) -> Result<Workspace> {
        let mut ws = ctx.load_workspace()?;
        if let Some(file) = file {
            let path = ctx.resolve(file);
            ws = Workspace::load(ws.config_path.clone().unwrap_or_default(), Some(&path))?;
        }

        match action.unwrap_or(SectionsAction::List) {
            SectionsAction::List => {
                Self::print(&ws);
                Ok(ws)
            }
            SectionsAction::Toggle { id } => Self::toggle(ws, &id),
        }
    }

    fn toggle(ws: Workspace, id: &str) -> Result<Workspace> {
        let Some(entry) = ws.sections.iter().rev().find(|s| s.id == id) else {
            bail!("unknown section `{id}`");
        };
        if entry.required {
            println!(
                "{}",
                format!("Section `{id}` is required and always shown").yellow()
            );
            return Ok(ws);
        }

        let sections_path = ws
            .sections_path
            .clone()
            .ok_or_else(|| anyhow!("no section list file configured, use `-f <file>`"))?;

        // only the section list is written
        let next = Workspace {
            config_path: None,
            ..ws.toggle(id)
        };
        next.save()?;

        let shown = next.visibility().get(id).unwrap_or(true);
        info!("section {id} toggled");
        println!(
            "{}",
            format!(
                "Section `{id}` is now {}\r\n  saved: {}",
                if shown { "shown" } else { "hidden" },
                sections_path.display()
            )
            .bold()
            .green()
        );
        Ok(Workspace {
            config_path: ws.config_path,
            ..next
        })
    }

    fn print(ws: &Workspace) {
        let visibility = ws.visibility();
        for section in &ws.sections {
            let shown = visibility.get(&section.id).unwrap_or(true);
            let mark = if shown { "on ".green() } else { "off".red() };
            let required = if section.required { "required".dimmed() } else { "".normal() };
            println!("  [{mark}] {:<18} {:<22} {required}", section.id, section.name);
        }
    }
}
