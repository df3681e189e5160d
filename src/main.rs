//! rinactive main entrypoint.

use rinactive::run;
use rinactive::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
