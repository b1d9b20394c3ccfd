//! Print a `[[directory.accounts]]` entry for `config.toml`.
//!
//! Usage: `hash_password <email> <company_username> <password> [ROLE]`

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [email, username, password, rest @ ..] = args.as_slice() else {
        eprintln!("usage: hash_password <email> <company_username> <password> [ROLE]");
        return ExitCode::FAILURE;
    };

    let role = rest.first().map(String::as_str);
    match server::auth::password::directory_entry(email, username, password, role) {
        Ok(entry) => {
            print!("{entry}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("hashing failed: {e}");
            ExitCode::FAILURE
        }
    }
}
