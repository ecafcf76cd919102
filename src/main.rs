//! Builds the Brutalita stroke font.
//!
//! Every glyph is drawn with one pen: straight strokes of constant weight,
//! rounded where they end.

use brutalita::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
