/// Startup flags, parsed once from the process argument vector.
///
/// Tokens are `--key=value` pairs. A token that neither starts with `--`
/// nor contains `=` stops parsing; everything after it is dropped but the
/// program keeps running with what was collected so far.
#[derive(Debug, Clone, Default)]
pub struct StartupFlags {
    username: Option<String>,
}

impl StartupFlags {
    pub fn parse(args: &[String]) -> Self {
        let mut flags = StartupFlags::default();

        for arg in args {
            if !arg.starts_with("--") && !arg.contains('=') {
                println!("invalid argument");
                break;
            }

            let body = arg.strip_prefix("--").unwrap_or(arg.as_str());
            if let Some((key, value)) = body.split_once('=') {
                // Unknown keys are parsed and dropped; last write wins.
                if key == "username" {
                    flags.username = Some(value.to_string());
                }
            }
        }

        flags
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn into_username(self) -> Option<String> {
        self.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_username() {
        let flags = StartupFlags::parse(&args(&["--username=alice"]));
        assert_eq!(flags.username(), Some("alice"));
    }

    #[test]
    fn test_parse_empty_args() {
        let flags = StartupFlags::parse(&[]);
        assert_eq!(flags.username(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let flags = StartupFlags::parse(&args(&["--username=alice", "--username=bob"]));
        assert_eq!(flags.username(), Some("bob"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let flags = StartupFlags::parse(&args(&["--verbose=yes", "--username=alice"]));
        assert_eq!(flags.username(), Some("alice"));
    }

    #[test]
    fn test_malformed_token_stops_parsing() {
        let flags = StartupFlags::parse(&args(&["oops", "--username=alice"]));
        assert_eq!(flags.username(), None);
    }

    #[test]
    fn test_bare_pair_without_dashes_accepted() {
        // "key=value" passes the gate but "key" is not a recognized flag.
        let flags = StartupFlags::parse(&args(&["username=alice"]));
        assert_eq!(flags.username(), Some("alice"));
    }

    #[test]
    fn test_flag_without_value_stores_nothing() {
        let flags = StartupFlags::parse(&args(&["--username"]));
        assert_eq!(flags.username(), None);
    }
}
