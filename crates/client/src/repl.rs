//! Line-oriented command loop for the catalog client.
//!
//! Reads one command per line from stdin, applies it to the
//! [`CatalogApp`], and prints the resulting table or message. Errors from
//! the app (including the session-expired notice) surface as a one-line
//! message and the loop continues.

use std::io::{self, BufRead, Write};
use std::str::{FromStr, SplitWhitespace};

use shelf_core::types::DbId;

use crate::api::ClientError;
use crate::app::CatalogApp;
use crate::table::{TableView, PAGE_SIZE_OPTIONS};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Register { username: String, password: String },
    Login { username: String, password: String },
    Logout,
    List,
    Refresh,
    Search { text: String },
    Page { page: usize },
    Size { size: usize },
    Next,
    Prev,
    Edit { id: DbId },
    Set { field: String, value: String },
    Save,
    Cancel,
    Delete { id: DbId },
    Help,
    Quit,
}

/// Parse one non-empty input line into a [`Command`].
pub fn parse(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let word = parts.next().unwrap_or_default();

    match word {
        "register" => {
            let (username, password) = two_words(&mut parts, "register <username> <password>")?;
            Ok(Command::Register { username, password })
        }
        "login" => {
            let (username, password) = two_words(&mut parts, "login <username> <password>")?;
            Ok(Command::Login { username, password })
        }
        "logout" => Ok(Command::Logout),
        "list" => Ok(Command::List),
        "refresh" => Ok(Command::Refresh),
        // The rest of the line is the search text; no argument clears it.
        "search" => Ok(Command::Search {
            text: rest(parts),
        }),
        "page" => Ok(Command::Page {
            // Pages are 1-based at the prompt, 0-based inside.
            page: number::<usize>(&mut parts, "page <n>")?.saturating_sub(1),
        }),
        "size" => Ok(Command::Size {
            size: number(&mut parts, "size <n>")?,
        }),
        "next" => Ok(Command::Next),
        "prev" => Ok(Command::Prev),
        "edit" => Ok(Command::Edit {
            id: number(&mut parts, "edit <id>")?,
        }),
        "set" => {
            let Some(field) = parts.next() else {
                return Err("Usage: set <name|price|category|stock> <value>".to_string());
            };
            Ok(Command::Set {
                field: field.to_string(),
                value: rest(parts),
            })
        }
        "save" => Ok(Command::Save),
        "cancel" => Ok(Command::Cancel),
        "delete" => Ok(Command::Delete {
            id: number(&mut parts, "delete <id>")?,
        }),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command: {other}. Type 'help' for a list.")),
    }
}

fn two_words(parts: &mut SplitWhitespace, usage: &str) -> Result<(String, String), String> {
    match (parts.next(), parts.next()) {
        (Some(a), Some(b)) => Ok((a.to_string(), b.to_string())),
        _ => Err(format!("Usage: {usage}")),
    }
}

fn number<T: FromStr>(parts: &mut SplitWhitespace, usage: &str) -> Result<T, String> {
    parts
        .next()
        .and_then(|w| w.parse().ok())
        .ok_or_else(|| format!("Usage: {usage}"))
}

fn rest(parts: SplitWhitespace) -> String {
    parts.collect::<Vec<_>>().join(" ")
}

/// Run the command loop until `quit` or end of input.
pub async fn run(app: &mut CatalogApp) {
    println!("shelf catalog client. Type 'help' for commands.");
    if app.is_authenticated() {
        println!("Resumed previous session.");
        if let Some(table) = app.table() {
            print_table(table);
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt(app);
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse(line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        if let Err(e) = execute(app, command).await {
            println!("{e}");
        }
    }
}

fn prompt(app: &CatalogApp) {
    if app.editing().is_some() {
        print!("shelf [edit]> ");
    } else if app.is_authenticated() {
        print!("shelf> ");
    } else {
        print!("shelf [login]> ");
    }
    let _ = io::stdout().flush();
}

/// Apply one command to the app, printing its outcome.
async fn execute(app: &mut CatalogApp, command: Command) -> Result<(), ClientError> {
    match command {
        Command::Register { username, password } => {
            let message = app.register(&username, &password).await?;
            println!("{message}");
        }
        Command::Login { username, password } => {
            app.login(&username, &password).await?;
            println!("Logged in.");
            show(app);
        }
        Command::Logout => {
            app.logout();
            println!("Logged out.");
        }
        Command::List => {
            let table = app.table().ok_or(ClientError::NotLoggedIn)?;
            print_table(table);
        }
        Command::Refresh => {
            app.refresh().await?;
            show(app);
        }
        Command::Search { text } => {
            let table = app.table_mut().ok_or(ClientError::NotLoggedIn)?;
            table.set_search(text);
            print_table(table);
        }
        Command::Page { page } => {
            let table = app.table_mut().ok_or(ClientError::NotLoggedIn)?;
            table.set_page(page);
            print_table(table);
        }
        Command::Size { size } => {
            let table = app.table_mut().ok_or(ClientError::NotLoggedIn)?;
            if !table.set_rows_per_page(size) {
                println!("Page size must be one of {PAGE_SIZE_OPTIONS:?}");
            }
            print_table(table);
        }
        Command::Next => {
            let table = app.table_mut().ok_or(ClientError::NotLoggedIn)?;
            table.next_page();
            print_table(table);
        }
        Command::Prev => {
            let table = app.table_mut().ok_or(ClientError::NotLoggedIn)?;
            table.prev_page();
            print_table(table);
        }
        Command::Edit { id } => {
            app.begin_edit(id)?;
            print_draft(app);
        }
        Command::Set { field, value } => {
            set_field(app, &field, value)?;
            print_draft(app);
        }
        Command::Save => {
            app.save_edit().await?;
            println!("Saved.");
            show(app);
        }
        Command::Cancel => {
            app.cancel_edit();
            println!("Edit discarded.");
        }
        Command::Delete { id } => {
            app.delete(id).await?;
            println!("Deleted.");
            show(app);
        }
        Command::Help => print_help(),
        Command::Quit => {}
    }
    Ok(())
}

fn set_field(app: &mut CatalogApp, field: &str, value: String) -> Result<(), ClientError> {
    let Some((_, draft)) = app.editing_mut() else {
        return Err(ClientError::NoDraft);
    };

    match field {
        "name" => draft.name = value,
        "price" => draft.price = value,
        "category" => draft.category = value,
        "stock" => match value.as_str() {
            "true" | "yes" | "in" => draft.in_stock = true,
            "false" | "no" | "out" => draft.in_stock = false,
            other => println!("Unrecognized stock value: {other} (use true or false)"),
        },
        other => println!("Unknown field: {other} (name, price, category, stock)"),
    }
    Ok(())
}

fn show(app: &CatalogApp) {
    if let Some(table) = app.table() {
        print_table(table);
    }
}

/// Render the current page of the table to stdout.
fn print_table(table: &TableView) {
    println!(
        "{:<6} {:<28} {:>10}  {:<16} {}",
        "id", "name", "price", "category", "stock"
    );
    for product in table.page_rows() {
        println!(
            "{:<6} {:<28} {:>10.2}  {:<16} {}",
            product.id,
            product.name,
            product.price,
            product.category,
            if product.in_stock { "in stock" } else { "out" },
        );
    }
    println!(
        "page {} of {}  ({} matching of {}, {} per page)",
        table.page() + 1,
        table.page_count(),
        table.filtered().len(),
        table.products().len(),
        table.rows_per_page(),
    );
}

fn print_draft(app: &CatalogApp) {
    if let Some((id, draft)) = app.editing() {
        println!(
            "editing {}: name={:?} price={:?} category={:?} stock={}",
            id, draft.name, draft.price, draft.category, draft.in_stock
        );
        println!("('set <field> <value>' to change, 'save' to apply, 'cancel' to discard)");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  register <username> <password>   create an account");
    println!("  login <username> <password>      start a session");
    println!("  logout                           end the session");
    println!("  list                             show the current page");
    println!("  refresh                          refetch from the server");
    println!("  search [text]                    filter by name (empty clears)");
    println!("  page <n> | next | prev           navigate pages");
    println!("  size <n>                         rows per page {PAGE_SIZE_OPTIONS:?}");
    println!("  edit <id>                        start editing a product");
    println!("  set <field> <value>              change a draft field");
    println!("  save | cancel                    finish or discard the edit");
    println!("  delete <id>                      delete a product");
    println!("  quit                             exit");
}
