//! TimeVault entrypoint.

use timevault::run;
use timevault::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
