use sysinfo::{CpuRefreshKind, RefreshKind, System};

use crate::command::OsQuery;
use crate::session::Session;

#[cfg(windows)]
const EOL: &str = "\r\n";
#[cfg(not(windows))]
const EOL: &str = "\n";

/// Answers one OS introspection query. Unrecognized flags never reach this
/// point; the command parser rejects them.
pub fn report(query: OsQuery, session: &Session) {
    match query {
        // Printed escaped: the raw bytes would render as a blank line.
        OsQuery::Eol => println!("{}", EOL.escape_debug()),
        OsQuery::Cpus => print_cpus(),
        OsQuery::HomeDir => println!("{}", session.home().display()),
        OsQuery::Username => println!("{}", whoami::username()),
        OsQuery::Architecture => println!("{}", std::env::consts::ARCH),
    }
}

fn print_cpus() {
    let sys = System::new_with_specifics(
        RefreshKind::new().with_cpu(CpuRefreshKind::everything()),
    );

    println!("Amount: {}", sys.cpus().len());
    for cpu in sys.cpus() {
        println!("{}", cpu_line(cpu.brand(), cpu.frequency()));
    }
}

/// Clock speed is reported in MHz; shown in GHz with the fractional part
/// only when nonzero.
fn cpu_line(brand: &str, mhz: u64) -> String {
    format!("Model: {}, Speed: {} GHz", brand, mhz as f64 / 1000.0)
}
