use log::{debug, error, info, warn};
use std::io::{self, BufRead, Write};

use crate::config::AppConfig;
use crate::protocol::{CommandStatus, handle_command, parse_command};
use crate::storage::DirectoryIndex;

pub struct Shell {
    index: DirectoryIndex,
    prompt: String,
    max_command_length: usize,
}

impl Shell {
    pub fn new(index: DirectoryIndex, config: &AppConfig) -> Self {
        Self {
            index,
            prompt: config.prompt.clone(),
            max_command_length: config.max_command_length,
        }
    }

    pub fn index(&self) -> &DirectoryIndex {
        &self.index
    }

    /// Reads commands from `reader` until `quit` or end of input.
    ///
    /// A failed command or an undecodable line is reported and the loop
    /// carries on. Only I/O errors on `reader` or `writer` end the session
    /// early.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> io::Result<()> {
        writeln!(
            writer,
            "Managing {} ({} file(s)). Type 'help' for commands.",
            self.index.root().display(),
            self.index.count()
        )?;

        let mut buf = Vec::new();

        loop {
            write!(writer, "{}", self.prompt)?;
            writer.flush()?;

            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    info!("End of input, leaving shell");
                    writeln!(writer)?;
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    return Err(e);
                }
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    warn!("Discarding input line: {}", e);
                    writeln!(writer, "Input is not valid UTF-8.")?;
                    continue;
                }
            };

            let input = line.trim_end_matches(['\r', '\n']);
            if input.chars().count() > self.max_command_length {
                writeln!(
                    writer,
                    "Command too long (maximum {} characters).",
                    self.max_command_length
                )?;
                continue;
            }

            if input.trim().is_empty() {
                continue;
            }

            let command = parse_command(input);
            debug!("Received: {:?}", command);

            let result = handle_command(&mut self.index, &command);
            if let Some(msg) = result.message {
                writeln!(writer, "{}", msg)?;
            }

            match result.status {
                CommandStatus::Exit => {
                    info!("Shell closed by user");
                    break;
                }
                CommandStatus::Success => {}
                CommandStatus::Failure(reason) => debug!("Command failed: {}", reason),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::NameLookup;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(tmp: &TempDir, config: &AppConfig, script: impl AsRef<[u8]>) -> (Shell, String) {
        let index = DirectoryIndex::open(tmp.path(), NameLookup::default());
        let mut shell = Shell::new(index, config);
        let mut out = Vec::new();
        shell.run(Cursor::new(script), &mut out).unwrap();
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn runs_until_quit() {
        let tmp = TempDir::new().unwrap();
        let (shell, out) = run_script(
            &tmp,
            &AppConfig::default(),
            "add a.txt\n\n   \nlist\nquit\nadd never.txt\n",
        );

        assert!(out.contains("File 'a.txt' added."));
        assert!(out.contains("1. a.txt"));
        assert!(out.contains("Goodbye!"));
        assert!(!tmp.path().join("never.txt").exists());
        assert_eq!(shell.index().count(), 1);
    }

    #[test]
    fn stops_at_end_of_input() {
        let tmp = TempDir::new().unwrap();
        let (shell, out) = run_script(&tmp, &AppConfig::default(), "add b.txt");

        assert!(out.contains("File 'b.txt' added."));
        assert_eq!(shell.index().list(), vec!["b.txt"]);
    }

    #[test]
    fn bad_input_keeps_prompting() {
        let tmp = TempDir::new().unwrap();
        let (_, out) = run_script(
            &tmp,
            &AppConfig::default(),
            "frobnicate\nadd bad/name.txt\nadd\nadd ok.txt\n",
        );

        assert!(out.contains("Unknown command"));
        assert!(out.contains("Invalid file name"));
        assert!(out.contains("File 'ok.txt' added."));
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let (shell, out) = run_script(
            &tmp,
            &AppConfig::default(),
            b"add \xff\xfe.txt\nadd ok.txt\n",
        );

        assert!(out.contains("Input is not valid UTF-8."));
        assert!(out.contains("File 'ok.txt' added."));
        assert!(tmp.path().join("ok.txt").is_file());
        assert_eq!(shell.index().list(), vec!["ok.txt"]);
    }

    #[test]
    fn rejects_over_long_lines() {
        let tmp = TempDir::new().unwrap();
        let config = AppConfig {
            max_command_length: 16,
            ..AppConfig::default()
        };
        let (shell, out) = run_script(&tmp, &config, "add a-very-long-name.txt\nadd c.txt\n");

        assert!(out.contains("Command too long (maximum 16 characters)."));
        assert_eq!(shell.index().list(), vec!["c.txt"]);
    }

    #[test]
    fn prints_prompt_per_line() {
        let tmp = TempDir::new().unwrap();
        let config = AppConfig {
            prompt: "> ".into(),
            ..AppConfig::default()
        };
        let (_, out) = run_script(&tmp, &config, "stats\nq\n");

        assert_eq!(out.matches("> ").count(), 2);
        assert!(out.contains("Total files: 0"));
    }
}
