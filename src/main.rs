//! calevent main entrypoint.

use calevent::run;
use calevent::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
