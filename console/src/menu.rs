use std::fmt::Display;
use std::io::{BufRead, Write};

use error_stack::{Report, ResultExt};

use application::service::{
    AddBookService, DeleteBookService, GetBookService, ListBookService, SearchBookService,
};
use kernel::KernelError;

use crate::controller::Controller;
use crate::error::ErrorMessage;
use crate::handler::Handler;
use crate::request::{
    AddBookRequest, BookTransformer, DeleteBookRequest, GetBookRequest, SearchBookRequest,
};
use crate::response::BookPresenter;

static MENU: &str = "\
=== E-book catalog ===
1) Add book
2) List books
3) Search books
4) Delete book
5) Find book by id
0) Exit";

enum Step {
    Continue,
    Quit,
}

/// Line-oriented text menu over any reader/writer pair.
pub struct Menu<'a, R, W> {
    handler: &'a Handler,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(handler: &'a Handler, input: R, output: W) -> Self {
        Self {
            handler,
            input,
            output,
        }
    }

    /// Runs until the user exits or the input is exhausted.
    pub fn run(&mut self) -> error_stack::Result<(), KernelError> {
        loop {
            self.say(MENU)?;
            let Some(choice) = self.prompt("Choose an option")? else {
                break;
            };
            let step = match choice.trim() {
                "1" => self.add_book()?,
                "2" => self.list_books()?,
                "3" => self.search_books()?,
                "4" => self.delete_book()?,
                "5" => self.find_book()?,
                "0" => Step::Quit,
                other => {
                    self.say(format!("Unknown option '{other}'."))?;
                    Step::Continue
                }
            };
            if let Step::Quit = step {
                break;
            }
        }
        self.say("Goodbye.")
    }

    #[tracing::instrument(skip(self))]
    fn add_book(&mut self) -> error_stack::Result<Step, KernelError> {
        let Some(title) = self.prompt("Title")? else {
            return Ok(Step::Quit);
        };
        let Some(author) = self.prompt("Author")? else {
            return Ok(Step::Quit);
        };
        let Some(category) = self.prompt("Category (optional)")? else {
            return Ok(Step::Quit);
        };
        let Some(format) = self.prompt("Format (optional)")? else {
            return Ok(Step::Quit);
        };

        let handler = self.handler;
        let outcome = Controller::new(BookTransformer, BookPresenter)
            .intake(AddBookRequest::new(title, author, category, format))
            .handle(|dto| handler.catalog().add_book(dto));
        self.show(outcome)
    }

    #[tracing::instrument(skip(self))]
    fn list_books(&mut self) -> error_stack::Result<Step, KernelError> {
        let handler = self.handler;
        let outcome = Controller::new((), BookPresenter).bypass(|| handler.catalog().list_books());
        self.show(outcome)
    }

    #[tracing::instrument(skip(self))]
    fn search_books(&mut self) -> error_stack::Result<Step, KernelError> {
        let Some(term) = self.prompt("Search title or author")? else {
            return Ok(Step::Quit);
        };

        let handler = self.handler;
        let outcome = Controller::new(BookTransformer, BookPresenter)
            .intake(SearchBookRequest::new(term))
            .handle(|dto| handler.catalog().search_books(dto));
        self.show(outcome)
    }

    #[tracing::instrument(skip(self))]
    fn delete_book(&mut self) -> error_stack::Result<Step, KernelError> {
        let Some(id) = self.prompt_id("Id of the book to delete")? else {
            return Ok(Step::Quit);
        };

        let handler = self.handler;
        let outcome = Controller::new(BookTransformer, BookPresenter)
            .intake(DeleteBookRequest::new(id))
            .handle(|dto| handler.catalog().delete_book(dto));
        self.show(outcome)
    }

    #[tracing::instrument(skip(self))]
    fn find_book(&mut self) -> error_stack::Result<Step, KernelError> {
        let Some(id) = self.prompt_id("Id of the book")? else {
            return Ok(Step::Quit);
        };

        let handler = self.handler;
        let outcome = Controller::new(BookTransformer, BookPresenter)
            .intake(GetBookRequest::new(id))
            .handle(|dto| handler.catalog().get_book(dto));
        self.show(outcome)
    }

    fn show<T: Display>(
        &mut self,
        outcome: Result<T, Report<KernelError>>,
    ) -> error_stack::Result<Step, KernelError> {
        match outcome {
            Ok(response) => {
                tracing::debug!(%response, "catalog operation succeeded");
                self.say(response)?;
            }
            Err(report) => {
                let message = ErrorMessage::from(report);
                match message.report().current_context() {
                    KernelError::Internal | KernelError::RepositoryNotReady => {
                        tracing::error!(error = ?message.report(), "catalog operation failed")
                    }
                    _ => tracing::info!(error = ?message.report(), "catalog operation rejected"),
                }
                self.say(message)?;
            }
        }
        Ok(Step::Continue)
    }

    /// Asks until the answer parses as an integer. A malformed answer is
    /// dropped along with the rest of its line.
    fn prompt_id(&mut self, label: &str) -> error_stack::Result<Option<i64>, KernelError> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match answer.trim().parse::<i64>() {
                Ok(id) => return Ok(Some(id)),
                Err(error) => {
                    tracing::debug!(%answer, %error, "discarding malformed id");
                    self.say("Please enter a whole number.")?;
                }
            }
        }
    }

    /// `None` once the input is exhausted.
    fn prompt(&mut self, label: &str) -> error_stack::Result<Option<String>, KernelError> {
        write!(self.output, "{label}: ")
            .and_then(|_| self.output.flush())
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable("Failed to write prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, message: impl Display) -> error_stack::Result<(), KernelError> {
        writeln!(self.output, "{message}")
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable("Failed to write output")
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use kernel::KernelError;

    use crate::handler::Handler;
    use crate::menu::Menu;

    fn session(input: &str) -> error_stack::Result<String, KernelError> {
        let handler = Handler::init()?;
        let mut output = Vec::new();
        Menu::new(&handler, Cursor::new(input.as_bytes()), &mut output).run()?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn adds_and_lists_books() -> error_stack::Result<(), KernelError> {
        let output = session(
            "1\n  Dune  \nFrank Herbert\nSci-Fi\nEPUB\n\
             1\nEmma\nJane Austen\n\n\n\
             2\n0\n",
        )?;
        assert!(output.contains("Book added with id 1."));
        assert!(output.contains("Book added with id 2."));
        assert!(output.contains("[1] Dune by Frank Herbert (Sci-Fi, EPUB)\n[2] Emma by Jane Austen\n"));
        assert!(output.ends_with("Goodbye.\n"));
        Ok(())
    }

    #[test]
    fn rejects_blank_title() -> error_stack::Result<(), KernelError> {
        let output = session("1\n   \nSomeone\n\n\n2\n0\n")?;
        assert!(output.contains("Error: title and author cannot be empty."));
        assert!(output.contains("No books found."));
        Ok(())
    }

    #[test]
    fn reprompts_on_malformed_id() -> error_stack::Result<(), KernelError> {
        let output = session("4\nabc def\n-5\n4\n7\n0\n")?;
        assert_eq!(output.matches("Please enter a whole number.").count(), 1);
        assert!(output.contains("Error: the id must be a positive number."));
        assert!(output.contains("Error: no book exists with that id."));
        Ok(())
    }

    #[test]
    fn deletes_and_finds_by_id() -> error_stack::Result<(), KernelError> {
        let output = session(
            "1\nDune\nFrank Herbert\n\n\n\
             5\n1\n\
             4\n1\n\
             5\n1\n0\n",
        )?;
        assert!(output.contains("[1] Dune by Frank Herbert\n"));
        assert!(output.contains("Book deleted."));
        assert!(output.contains("No book with that id."));
        Ok(())
    }

    #[test]
    fn searches_case_insensitively() -> error_stack::Result<(), KernelError> {
        let output = session(
            "1\nCien años de soledad\nGarcía Márquez\n\n\n\
             3\ngarcía\n\
             3\n   \n0\n",
        )?;
        assert!(output.contains("[1] Cien años de soledad by García Márquez\n"));
        assert!(output.contains("No books found."));
        Ok(())
    }

    #[test]
    fn stops_when_input_ends() -> error_stack::Result<(), KernelError> {
        let output = session("1\nDune\n")?;
        assert!(!output.contains("Book added"));
        assert!(output.ends_with("Goodbye.\n"));

        let output = session("9\n")?;
        assert!(output.contains("Unknown option '9'."));
        Ok(())
    }
}
