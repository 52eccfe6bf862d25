use std::path::PathBuf;

/// One parsed input line. Arity is validated while parsing, so every
/// variant carries a well-shaped payload and the dispatcher can match
/// exhaustively without re-checking argument counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Decompress { src: PathBuf, dst: PathBuf },
    Compress { src: PathBuf, dst: PathBuf },
    Hash { path: PathBuf },
    Os(OsQuery),
    Remove { path: PathBuf },
    Move { src: PathBuf, dst: PathBuf },
    Copy { src: PathBuf, dst: PathBuf },
    Rename { from: PathBuf, to: PathBuf },
    Read { path: PathBuf },
    Create { path: PathBuf },
    List,
    Exit,
    Up,
    ChangeDir { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsQuery {
    Eol,
    Cpus,
    HomeDir,
    Username,
    Architecture,
}

/// Two-tier command failure: shape problems are caught before any I/O,
/// everything that fails at the resource layer collapses to a single
/// generic message with the cause dropped.
#[derive(Debug)]
pub enum CommandError {
    InvalidInput,
    OperationFailed,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidInput => write!(f, "Invalid input"),
            CommandError::OperationFailed => write!(f, "Operation failed"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(_: std::io::Error) -> Self {
        CommandError::OperationFailed
    }
}

impl Command {
    /// Splits a line on whitespace and matches the first token against the
    /// command set. No quoting support, so arguments cannot contain spaces.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().ok_or(CommandError::InvalidInput)?;
        let args: Vec<&str> = tokens.collect();

        match name {
            "decompress" => {
                let (src, dst) = two_paths(&args)?;
                Ok(Command::Decompress { src, dst })
            }
            "compress" => {
                let (src, dst) = two_paths(&args)?;
                Ok(Command::Compress { src, dst })
            }
            "hash" => Ok(Command::Hash { path: one_path(&args)? }),
            "os" => match args.as_slice() {
                [flag] => Ok(Command::Os(OsQuery::parse(flag)?)),
                _ => Err(CommandError::InvalidInput),
            },
            "rm" => Ok(Command::Remove { path: one_path(&args)? }),
            "mv" => {
                let (src, dst) = two_paths(&args)?;
                Ok(Command::Move { src, dst })
            }
            "cp" => {
                let (src, dst) = two_paths(&args)?;
                Ok(Command::Copy { src, dst })
            }
            "rn" => {
                let (from, to) = two_paths(&args)?;
                Ok(Command::Rename { from, to })
            }
            "cat" => Ok(Command::Read { path: one_path(&args)? }),
            "add" => Ok(Command::Create { path: one_path(&args)? }),
            "ls" => no_args(&args).map(|_| Command::List),
            ".exit" => no_args(&args).map(|_| Command::Exit),
            "up" => no_args(&args).map(|_| Command::Up),
            "cd" => Ok(Command::ChangeDir { path: one_path(&args)? }),
            _ => Err(CommandError::InvalidInput),
        }
    }
}

impl OsQuery {
    fn parse(flag: &str) -> Result<Self, CommandError> {
        match flag {
            "--EOL" => Ok(OsQuery::Eol),
            "--cpus" => Ok(OsQuery::Cpus),
            "--homedir" => Ok(OsQuery::HomeDir),
            "--username" => Ok(OsQuery::Username),
            "--architecture" => Ok(OsQuery::Architecture),
            _ => Err(CommandError::InvalidInput),
        }
    }
}

fn one_path(args: &[&str]) -> Result<PathBuf, CommandError> {
    match args {
        [path] => Ok(PathBuf::from(path)),
        _ => Err(CommandError::InvalidInput),
    }
}

fn two_paths(args: &[&str]) -> Result<(PathBuf, PathBuf), CommandError> {
    match args {
        [first, second] => Ok((PathBuf::from(first), PathBuf::from(second))),
        _ => Err(CommandError::InvalidInput),
    }
}

fn no_args(args: &[&str]) -> Result<(), CommandError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::InvalidInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_path_commands() {
        assert_eq!(
            Command::parse("cp notes.txt backup.txt").unwrap(),
            Command::Copy { src: "notes.txt".into(), dst: "backup.txt".into() }
        );
        assert_eq!(
            Command::parse("mv a b").unwrap(),
            Command::Move { src: "a".into(), dst: "b".into() }
        );
        assert_eq!(
            Command::parse("rn old new").unwrap(),
            Command::Rename { from: "old".into(), to: "new".into() }
        );
        assert_eq!(
            Command::parse("compress a a.br").unwrap(),
            Command::Compress { src: "a".into(), dst: "a.br".into() }
        );
        assert_eq!(
            Command::parse("decompress a.br a").unwrap(),
            Command::Decompress { src: "a.br".into(), dst: "a".into() }
        );
    }

    #[test]
    fn test_parse_one_path_commands() {
        assert_eq!(
            Command::parse("hash notes.txt").unwrap(),
            Command::Hash { path: "notes.txt".into() }
        );
        assert_eq!(Command::parse("rm junk").unwrap(), Command::Remove { path: "junk".into() });
        assert_eq!(Command::parse("cat notes.txt").unwrap(), Command::Read { path: "notes.txt".into() });
        assert_eq!(Command::parse("add new.txt").unwrap(), Command::Create { path: "new.txt".into() });
        assert_eq!(Command::parse("cd ..").unwrap(), Command::ChangeDir { path: "..".into() });
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(Command::parse("ls").unwrap(), Command::List);
        assert_eq!(Command::parse(".exit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("up").unwrap(), Command::Up);
    }

    #[test]
    fn test_parse_os_queries() {
        assert_eq!(Command::parse("os --EOL").unwrap(), Command::Os(OsQuery::Eol));
        assert_eq!(Command::parse("os --cpus").unwrap(), Command::Os(OsQuery::Cpus));
        assert_eq!(Command::parse("os --homedir").unwrap(), Command::Os(OsQuery::HomeDir));
        assert_eq!(Command::parse("os --username").unwrap(), Command::Os(OsQuery::Username));
        assert_eq!(
            Command::parse("os --architecture").unwrap(),
            Command::Os(OsQuery::Architecture)
        );
    }

    #[test]
    fn test_unknown_os_flag_rejected() {
        assert!(matches!(Command::parse("os --memory"), Err(CommandError::InvalidInput)));
        assert!(matches!(Command::parse("os EOL"), Err(CommandError::InvalidInput)));
        assert!(matches!(Command::parse("os"), Err(CommandError::InvalidInput)));
        assert!(matches!(
            Command::parse("os --EOL --cpus"),
            Err(CommandError::InvalidInput)
        ));
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        assert!(matches!(Command::parse("cp one"), Err(CommandError::InvalidInput)));
        assert!(matches!(Command::parse("cp a b c"), Err(CommandError::InvalidInput)));
        assert!(matches!(Command::parse("hash"), Err(CommandError::InvalidInput)));
        assert!(matches!(Command::parse("cd a b"), Err(CommandError::InvalidInput)));
        assert!(matches!(Command::parse("ls extra"), Err(CommandError::InvalidInput)));
        assert!(matches!(Command::parse("up now"), Err(CommandError::InvalidInput)));
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(matches!(Command::parse("frobnicate x"), Err(CommandError::InvalidInput)));
        assert!(matches!(Command::parse("exit"), Err(CommandError::InvalidInput)));
    }

    #[test]
    fn test_empty_line_rejected() {
        assert!(matches!(Command::parse(""), Err(CommandError::InvalidInput)));
        assert!(matches!(Command::parse("   "), Err(CommandError::InvalidInput)));
    }

    #[test]
    fn test_extra_whitespace_tolerated() {
        assert_eq!(
            Command::parse("  cp   a   b  ").unwrap(),
            Command::Copy { src: "a".into(), dst: "b".into() }
        );
    }

    #[test]
    fn test_error_display_strings() {
        assert_eq!(CommandError::InvalidInput.to_string(), "Invalid input");
        assert_eq!(CommandError::OperationFailed.to_string(), "Operation failed");
    }
}
