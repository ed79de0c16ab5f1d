//! rbreakcheck main entrypoint.

use rbreakcheck::run;
use rbreakcheck::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
