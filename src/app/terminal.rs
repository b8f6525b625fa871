use std::io::Write;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Enter raw mode and the alternate screen.
///
/// # Errors
/// - Raw mode or the alternate screen cannot be entered; raw mode is left again
///   when only the second step fails.
pub fn setup_terminal() -> Result<()> {
    enter_screen(&mut std::io::stdout(), enable_raw_mode, disable_raw_mode)?;
    Ok(())
}

/// What: Enable raw mode, then switch `out` to the alternate screen.
///
/// Details:
/// - When the screen switch fails, `disable_raw` runs before the error is returned.
fn enter_screen<W: Write>(
    out: &mut W,
    enable_raw: impl FnOnce() -> std::io::Result<()>,
    disable_raw: impl FnOnce() -> std::io::Result<()>,
) -> std::io::Result<()> {
    enable_raw()?;
    if let Err(e) = execute!(out, EnterAlternateScreen) {
        if let Err(undo) = disable_raw() {
            tracing::warn!(error = %undo, "failed to leave raw mode");
        }
        return Err(e);
    }
    Ok(())
}

/// Leave the alternate screen and restore the cursor.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}
