use fman::flags::StartupFlags;
use fman::session::Session;
use fman::shell::Shell;
use std::env;

fn main() -> Result<(), fman::error::ShellError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let flags = StartupFlags::parse(&args);

    let session = Session::new(flags.into_username())?;
    let mut shell = Shell::new(session)?;
    shell.run()
}
