use std::env;
use std::path::Path;

use rustyline::DefaultEditor;

use crate::command::{Command, CommandError};
use crate::error::ShellError;
use crate::ops;
use crate::session::Session;
use crate::style::Palette;

pub struct Shell {
    editor: DefaultEditor,
    session: Session,
    palette: Palette,
}

impl Shell {
    pub fn new(session: Session) -> Result<Self, ShellError> {
        let editor = DefaultEditor::new()?;

        Ok(Shell {
            editor,
            session,
            palette: Palette::new(),
        })
    }

    /// The interactive loop. Starts in the home directory, greets the
    /// user, then reads one command per line until `.exit`, end of input,
    /// or an interrupt.
    pub fn run(&mut self) -> Result<(), ShellError> {
        env::set_current_dir(self.session.home())?;
        self.install_interrupt_handler()?;

        let greeting = format!(
            "Welcome to the File Manager, {}!",
            self.session.display_name()
        );
        println!("{}", self.palette.banner(&greeting));
        self.print_location()?;

        loop {
            match self.editor.readline("> ") {
                Ok(line) => {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        eprintln!("Warning: Couldn't add to history: {}", e);
                    }

                    match Command::parse(&line) {
                        Ok(command) => {
                            if let Err(e) = self.dispatch(command) {
                                println!("{}", e);
                            }
                        }
                        Err(e) => println!("{}", e),
                    }

                    self.print_location()?;
                }
                Err(rustyline::error::ReadlineError::Interrupted)
                | Err(rustyline::error::ReadlineError::Eof) => self.farewell(),
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Every handler runs to completion before the location line prints,
    /// so no command can race a later one.
    fn dispatch(&self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::Decompress { src, dst } => ops::codec::decompress(&src, &dst),
            Command::Compress { src, dst } => ops::codec::compress(&src, &dst),
            Command::Hash { path } => {
                let digest = ops::hash::digest_file(&path)?;
                println!("{}", digest);
                Ok(())
            }
            Command::Os(query) => {
                ops::osinfo::report(query, &self.session);
                Ok(())
            }
            Command::Remove { path } => ops::fs::remove(&path),
            Command::Move { src, dst } => ops::fs::move_path(&src, &dst),
            Command::Copy { src, dst } => ops::fs::copy(&src, &dst),
            Command::Rename { from, to } => ops::fs::rename(&from, &to),
            Command::Read { path } => ops::fs::read_to_stdout(&path),
            Command::Create { path } => ops::fs::create(&path),
            Command::List => ops::fs::list(Path::new(".")),
            Command::ChangeDir { path } => ops::fs::change_dir(&path),
            Command::Up => ops::fs::go_up(self.session.home()),
            Command::Exit => self.farewell(),
        }
    }

    /// Covers interrupts delivered mid-operation; an interrupt at the
    /// prompt surfaces as `ReadlineError::Interrupted` instead.
    fn install_interrupt_handler(&self) -> Result<(), ShellError> {
        let name = self.session.display_name().to_string();
        ctrlc::set_handler(move || {
            println!("\n{}", farewell_line(&name));
            std::process::exit(0);
        })?;
        Ok(())
    }

    fn print_location(&self) -> Result<(), ShellError> {
        let cwd = env::current_dir()?;
        let line = format!("You are currently in {}", cwd.display());
        println!("{}", self.palette.location(&line));
        Ok(())
    }

    fn farewell(&self) -> ! {
        println!(
            "{}",
            self.palette.banner(&farewell_line(self.session.display_name()))
        );
        std::process::exit(0)
    }
}

fn farewell_line(name: &str) -> String {
    format!("Thanks for using File Manager, {}, goodbye!", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farewell_line_addresses_user() {
        assert_eq!(
            farewell_line("alice"),
            "Thanks for using File Manager, alice, goodbye!"
        );
    }
}
