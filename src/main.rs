//! boardreport main entrypoint.

use boardreport::run;
use boardreport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
