use chrono::NaiveDate;
use clap::Subcommand;

use crate::error::{AppError, Result};
use crate::models::JournalEntry;

use super::App;

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write a journal entry
    Add {
        /// The reflection text
        content: String,
        #[arg(long)]
        title: Option<String>,
        /// Entry date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show entries, newest first
    List,
    /// Rewrite an entry's title and/or content
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete one entry
    Delete { id: String },
    /// Delete every entry
    Clear {
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(app: &App, action: JournalAction) -> Result<()> {
    app.require_user()?;

    match action {
        JournalAction::Add { content, title, date } => {
            if content.trim().is_empty() {
                return Err(AppError::Validation(
                    "journal content must not be empty".to_string(),
                ));
            }
            let entry = app.journal.add(
                date.unwrap_or(app.today),
                title.as_deref().unwrap_or(""),
                &content,
            );
            println!("Saved \"{}\" for {}.", entry.title, entry.date);
        }
        JournalAction::List => {
            let mut entries = app.journal.all();
            if entries.is_empty() {
                println!("No journal entries yet.");
                return Ok(());
            }
            entries.sort_by(|a, b| b.date.cmp(&a.date));
            for entry in &entries {
                println!("{}  {}  [{}]", entry.date, entry.title, entry.id);
                println!("    {}", entry.content);
            }
        }
        JournalAction::Update { id, title, content } => {
            let current = app
                .journal
                .all()
                .into_iter()
                .find(|e| e.id == id)
                .ok_or_else(|| AppError::NotFound(format!("journal entry {id}")))?;

            let content = content.unwrap_or(current.content);
            if content.trim().is_empty() {
                return Err(AppError::Validation(
                    "journal content must not be empty".to_string(),
                ));
            }
            app.journal.update(JournalEntry {
                id: current.id,
                date: current.date,
                title: title.unwrap_or(current.title),
                content: content.trim().to_string(),
            });
            println!("Entry updated.");
        }
        JournalAction::Delete { id } => {
            if app.journal.delete(&id) {
                println!("Entry deleted.");
            } else {
                println!("No journal entry with id {id}.");
            }
        }
        JournalAction::Clear { yes } => {
            if !app.confirmed(yes, "Clear all journal entries? This cannot be undone.") {
                println!("Kept.");
                return Ok(());
            }
            app.journal.clear();
            println!("All journal entries cleared.");
        }
    }
    Ok(())
}
