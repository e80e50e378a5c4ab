//! The interactive notes session.
//!
//! A [`Session`] owns the active notes file plus the console it talks to. It
//! prints a menu, reads one line, runs the chosen action and loops until the
//! user exits. File errors are reported and the loop carries on; only console
//! failures end the session early.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::Result;
use crate::note::{decode_line, format_numbered_line, Note};
use crate::store::NotesFile;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Append a note.
    Add,
    /// List the notes file with line numbers.
    View,
    /// Truncate the notes file.
    Clear,
    /// Switch to another notes file.
    ChangeFile,
    /// Leave the session.
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::View),
            "3" => Ok(Self::Clear),
            "4" => Ok(Self::ChangeFile),
            "5" => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

const MENU: &str = "\
1) Add a note (single or multi-line)
2) View all notes
3) Clear notes file
4) Change notes file
5) Exit";

/// A running notes session.
#[derive(Debug)]
pub struct Session<R, W> {
    file: NotesFile,
    input: R,
    output: W,
    show_banner: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session on `path`, creating the file if it is missing.
    ///
    /// A file that cannot be created is reported as a warning and the path is
    /// kept; later actions surface their own errors.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `output` fails.
    pub fn new(path: impl Into<PathBuf>, input: R, output: W) -> Result<Self> {
        let mut session = Self {
            file: NotesFile::new(path),
            input,
            output,
            show_banner: true,
        };
        session.ensure_file()?;
        Ok(session)
    }

    /// Enable or disable the startup banner.
    #[must_use]
    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// The notes file currently in use.
    #[must_use]
    pub fn current_path(&self) -> &Path {
        self.file.path()
    }

    /// Consume the session and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from or writing to the console fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            writeln!(self.output, "\n=== Simple Notes Manager ===")?;
            writeln!(
                self.output,
                "Data file: {}",
                self.file.absolute_path().display()
            )?;
        }

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("Input closed, leaving session");
                writeln!(self.output, "\nGoodbye!")?;
                return Ok(());
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Add) => self.add_note()?,
                Ok(MenuChoice::View) => self.view_notes()?,
                Ok(MenuChoice::Clear) => self.clear_notes()?,
                Ok(MenuChoice::ChangeFile) => self.change_file()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                Err(()) => writeln!(self.output, "Invalid choice. Try 1-5.")?,
            }
        }
    }

    /// Read lines until an empty one and append them as a single note.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from or writing to the console fails.
    pub fn add_note(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\nType your note. Press ENTER on an empty line to finish:"
        )?;
        self.output.flush()?;

        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }

        let Some(note) = Note::from_lines(lines) else {
            writeln!(self.output, "No text entered. Nothing saved.")?;
            return Ok(());
        };

        match self.file.append(&note) {
            Ok(()) => {
                info!("Saved note to {}", self.file.path().display());
                writeln!(
                    self.output,
                    "Note saved to '{}'.",
                    self.file.path().display()
                )?;
            }
            Err(e) => {
                debug!("Append failed: {e}");
                writeln!(self.output, "Error writing to file: {e}")?;
            }
        }
        Ok(())
    }

    /// Print every line of the notes file with its line number.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the console fails.
    pub fn view_notes(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\n=== Notes in '{}' ===",
            self.file.path().display()
        )?;

        if self.file.is_empty_or_missing() {
            writeln!(self.output, "(File is empty or does not exist.)")?;
            return Ok(());
        }

        match self.file.read_lines() {
            Ok(lines) => {
                for (index, line) in lines.iter().enumerate() {
                    writeln!(self.output, "{}", format_numbered_line(index + 1, line))?;
                }
            }
            Err(e) => {
                debug!("Read failed: {e}");
                writeln!(self.output, "Error reading file: {e}")?;
            }
        }
        Ok(())
    }

    /// Truncate the notes file after a `y` confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from or writing to the console fails.
    pub fn clear_notes(&mut self) -> Result<()> {
        write!(
            self.output,
            "\nAre you sure you want to clear all notes? (y/N): "
        )?;
        self.output.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        if !is_confirmation(&answer) {
            writeln!(self.output, "Cancelled.")?;
            return Ok(());
        }

        match self.file.clear() {
            Ok(()) => {
                info!("Cleared {}", self.file.path().display());
                writeln!(
                    self.output,
                    "All notes cleared in '{}'.",
                    self.file.path().display()
                )?;
            }
            Err(e) => {
                debug!("Clear failed: {e}");
                writeln!(self.output, "Error clearing file: {e}")?;
            }
        }
        Ok(())
    }

    /// Point the session at another notes file, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from or writing to the console fails.
    pub fn change_file(&mut self) -> Result<()> {
        write!(
            self.output,
            "\nEnter new file path (e.g., mynotes.txt or /tmp/notes.txt): "
        )?;
        self.output.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        let new_path = answer.trim();
        if new_path.is_empty() {
            writeln!(self.output, "No change.")?;
            return Ok(());
        }

        self.file = NotesFile::new(new_path);
        info!("Switched to {}", self.file.path().display());
        self.ensure_file()?;
        writeln!(
            self.output,
            "Now using: {}",
            self.file.absolute_path().display()
        )?;
        Ok(())
    }

    fn ensure_file(&mut self) -> Result<()> {
        match self.file.ensure_exists() {
            Ok(true) => writeln!(
                self.output,
                "Created new notes file: {}",
                self.file.absolute_path().display()
            )?,
            Ok(false) => {}
            Err(e) => {
                debug!("Could not create {}: {e}", self.file.path().display());
                writeln!(
                    self.output,
                    "Warning: could not create file '{}': {e}",
                    self.file.path().display()
                )?;
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nChoose an option:")?;
        writeln!(self.output, "{MENU}")?;
        write!(self.output, "Enter choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its terminator. `None` means end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced, never rejected.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        Ok(Some(decode_line(&bytes)))
    }
}

/// True only for `y`, ignoring case and surrounding whitespace.
fn is_confirmation(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
