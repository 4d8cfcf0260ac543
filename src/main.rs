//! mainsboard main entrypoint.

use mainsboard::run;
use mainsboard::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
