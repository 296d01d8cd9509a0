//! Compare command implementation

use crate::cli::CompareArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::ui;

/// Run compare command
pub fn run(settings: &Settings, args: CompareArgs) -> Result<()> {
    print!(
        "{}",
        ui::render_comparison(&args.left, &args.right, &settings.threshold)
    );
    Ok(())
}
