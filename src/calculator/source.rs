use std::io::BufRead;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{LogicError, Result};

/// Where the calculator reads its answers from.
///
/// `Ok(None)` means the input is exhausted (end of file, Ctrl-D, Ctrl-C).
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// False when the caller has to print `prompt` itself.
    fn shows_prompt(&self) -> bool {
        true
    }
}

/// Interactive terminal input with line editing and history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<EditorSource> {
        let editor = DefaultEditor::new().map_err(|e| LogicError::Input(e.to_string()))?;
        Ok(EditorSource { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        log::debug!("history entry dropped: {e}");
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(LogicError::Input(e.to_string())),
        }
    }
}

/// Plain buffered input, one answer per line. Prompts are left to the caller.
pub struct ReaderSource<B> {
    reader: B,
}

impl<B: BufRead> ReaderSource<B> {
    pub fn new(reader: B) -> ReaderSource<B> {
        ReaderSource { reader }
    }
}

impl<B: BufRead> LineSource for ReaderSource<B> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    fn shows_prompt(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_yields_lines_then_none() {
        let mut source = ReaderSource::new(Cursor::new("1\r\n0\n"));
        assert_eq!(source.read_line("> ").unwrap().as_deref(), Some("1"));
        assert_eq!(source.read_line("> ").unwrap().as_deref(), Some("0"));
        assert_eq!(source.read_line("> ").unwrap(), None);
        assert!(!source.shows_prompt());
    }
}
