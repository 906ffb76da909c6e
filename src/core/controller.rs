use std::io::{BufRead, ErrorKind, Write};
use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        AppState {
            config,
            store,
        }
    }
}

// ConsoleError is the text shown to the user when a command fails.
#[derive(Debug, PartialEq)]
pub struct ConsoleError {
    pub message: String,
}

impl From<CommandError> for ConsoleError {
    fn from(err: CommandError) -> Self {
        let message = match err {
            CommandError::DuplicateKey { .. } => {
                "Error: A book with this ISBN already exists!".to_string()
            }
            CommandError::NotFound { message } => {
                format!("Error: {}", message)
            }
            CommandError::Validation { message, .. } => {
                format!("Error: {}", message)
            }
            CommandError::Serialization { message } => {
                format!("Error: malformed library data ({})", message)
            }
            CommandError::Io { message } => {
                format!("Error: {}", message)
            }
        };
        ConsoleError { message }
    }
}

// Console wraps the line-oriented terminal. Input lines come back exactly as typed,
// minus the line terminator; None means the input stream is closed.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    pub fn say(&mut self, line: &str) -> LibraryResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => {
                let line = buf.strip_suffix('\n').unwrap_or(buf.as_str());
                Ok(Some(line.strip_suffix('\r').unwrap_or(line).to_string()))
            }
            // undecodable input counts as a line nobody can match
            Err(err) if err.kind() == ErrorKind::InvalidData => Ok(Some(String::new())),
            Err(err) => Err(err.into()),
        }
    }

    pub fn pause(&mut self) -> LibraryResult<()> {
        let _ = self.prompt("\nPress Enter to continue...")?;
        Ok(())
    }

    pub fn clear(&mut self) -> LibraryResult<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
            self.output.flush()?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::core::command::CommandError;
    use crate::core::controller::{Console, ConsoleError};

    #[test]
    fn test_should_map_command_errors() {
        let err = ConsoleError::from(CommandError::DuplicateKey { message: "dup".to_string() });
        assert_eq!("Error: A book with this ISBN already exists!", err.message.as_str());
        let err = ConsoleError::from(CommandError::Io { message: "data.txt: denied".to_string() });
        assert_eq!("Error: data.txt: denied", err.message.as_str());
    }

    #[test]
    fn test_should_read_lines_as_typed_until_eof() {
        let mut console = Console::new(Cursor::new("  Dune \r\n\n 111"), Vec::new(), false);
        assert_eq!(Some("  Dune ".to_string()), console.prompt("Title: ").expect("read"));
        assert_eq!(Some("".to_string()), console.read_line().expect("read"));
        assert_eq!(Some(" 111".to_string()), console.read_line().expect("read"));
        assert_eq!(None, console.read_line().expect("read"));
        assert_eq!("Title: ", String::from_utf8(console.into_output()).expect("utf8"));
    }

    #[test]
    fn test_should_treat_invalid_utf8_as_blank_line() {
        let mut console = Console::new(Cursor::new(vec![0xff, 0xfe, b'\n', b'7', b'\n']), Vec::new(), false);
        assert_eq!(Some("".to_string()), console.read_line().expect("read"));
        assert_eq!(Some("7".to_string()), console.read_line().expect("read"));
    }

    #[test]
    fn test_should_clear_only_when_enabled() {
        let mut console = Console::new(Cursor::new(""), Vec::new(), true);
        console.clear().expect("clear");
        assert_eq!("\x1B[2J\x1B[1;1H", String::from_utf8(console.into_output()).expect("utf8"));

        let mut console = Console::new(Cursor::new(""), Vec::new(), false);
        console.clear().expect("clear");
        assert!(console.into_output().is_empty());
    }
}
