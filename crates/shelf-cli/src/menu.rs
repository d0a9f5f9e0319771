//! Interactive numbered menu over a catalog store.

use shelf_core::{Book, CatalogError, CatalogStore};

use crate::input::prompt_line;

/// One iteration's worth of user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    IssueBook,
    ReturnBook,
    ViewAll,
    Search,
    Exit,
}

impl MenuChoice {
    /// Map the numbered selection to a choice. `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::IssueBook),
            "3" => Some(Self::ReturnBook),
            "4" => Some(Self::ViewAll),
            "5" => Some(Self::Search),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu() {
    println!();
    println!("===== LIBRARY CATALOG =====");
    println!("1. Add Book");
    println!("2. Issue Book");
    println!("3. Return Book");
    println!("4. View All Books");
    println!("5. Search Book");
    println!("6. Exit");
}

/// Run the menu loop until the user exits or input runs out.
///
/// Errors from a single action are printed and the loop continues; only
/// input-channel failures end the session early.
pub fn run<C: CatalogStore>(catalog: &mut C) -> anyhow::Result<()> {
    loop {
        print_menu();
        let choice = match prompt_line("Enter choice")? {
            Some(value) => value,
            None => break,
        };

        let done = match MenuChoice::parse(&choice) {
            Some(choice) => match dispatch(catalog, choice) {
                Ok(done) => done,
                Err(err) => {
                    println!("Error: {}", err);
                    false
                }
            },
            None => {
                println!("Invalid choice!");
                false
            }
        };
        if done {
            break;
        }
    }
    Ok(())
}

fn dispatch<C: CatalogStore>(catalog: &mut C, choice: MenuChoice) -> anyhow::Result<bool> {
    match choice {
        MenuChoice::AddBook => add_book(catalog)?,
        MenuChoice::IssueBook => issue_book(catalog)?,
        MenuChoice::ReturnBook => return_book(catalog)?,
        MenuChoice::ViewAll => view_all(catalog),
        MenuChoice::Search => search(catalog)?,
        MenuChoice::Exit => {
            println!("Exiting...");
            return Ok(true);
        }
    }
    Ok(false)
}

fn add_book<C: CatalogStore>(catalog: &mut C) -> anyhow::Result<()> {
    let title = match prompt_line("Title")? {
        Some(value) => value,
        None => return Ok(()),
    };
    let author = match prompt_line("Author")? {
        Some(value) => value,
        None => return Ok(()),
    };
    let isbn = match prompt_line("ISBN")? {
        Some(value) => value,
        None => return Ok(()),
    };
    if isbn.is_empty() {
        return Err(CatalogError::InvalidInput("ISBN cannot be empty".to_string()).into());
    }

    catalog.add_book(Book::new(title, author, isbn))?;
    println!("Book added!");
    Ok(())
}

fn issue_book<C: CatalogStore>(catalog: &mut C) -> anyhow::Result<()> {
    let isbn = match prompt_line("Enter ISBN to issue")? {
        Some(value) => value,
        None => return Ok(()),
    };

    match catalog.issue(&isbn) {
        Ok(true) => println!("Book issued."),
        Ok(false) | Err(CatalogError::NotFound(_)) => {
            println!("Cannot issue (maybe already issued).")
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn return_book<C: CatalogStore>(catalog: &mut C) -> anyhow::Result<()> {
    let isbn = match prompt_line("Enter ISBN to return")? {
        Some(value) => value,
        None => return Ok(()),
    };

    match catalog.return_book(&isbn) {
        Ok(true) => println!("Book returned."),
        Ok(false) | Err(CatalogError::NotFound(_)) => {
            println!("Cannot return (maybe already available).")
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn view_all<C: CatalogStore>(catalog: &C) {
    let books = catalog.list_all();
    if books.is_empty() {
        println!("No books in library.");
        return;
    }
    for book in books {
        println!("{}", book);
    }
}

fn search<C: CatalogStore>(catalog: &C) -> anyhow::Result<()> {
    let needle = match prompt_line("Enter title keyword")? {
        Some(value) => value,
        None => return Ok(()),
    };

    let matches = catalog.find_by_title(&needle);
    if matches.is_empty() {
        println!("No matching books.");
        return Ok(());
    }
    for book in matches {
        println!("{}", book);
    }
    Ok(())
}
