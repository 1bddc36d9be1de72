//! Screen rendering
//!
//! Builds the screen for each machine state on the 2x16 LCD. Prompts
//! leave the cursor where the operator's digits will be echoed.

use crate::job::Job;
use crate::traits::{DisplayError, TextDisplay, TextDisplayExt};

/// Render the home menu
pub async fn render_home<D: TextDisplay>(display: &mut D) -> Result<(), DisplayError> {
    display.clear().await?;
    display.write_str("Menu").await?;
    display.text_at(0, 1, "1.Begin").await
}

/// Render the piece length prompt
///
/// Digits are echoed from (0, 1), in front of the "mm" unit label.
pub async fn render_length_prompt<D: TextDisplay>(display: &mut D) -> Result<(), DisplayError> {
    display.clear().await?;
    display.write_str("Length:  * Back").await?;
    display.text_at(6, 1, "mm # Enter").await?;
    display.set_cursor(0, 1).await
}

/// Render the piece count prompt
pub async fn render_amount_prompt<D: TextDisplay>(display: &mut D) -> Result<(), DisplayError> {
    display.clear().await?;
    display.write_str("Amount:  * Back").await?;
    display.text_at(9, 1, "# Enter").await?;
    display.set_cursor(0, 1).await
}

/// Render the job summary, e.g. `3x250mm`
pub async fn render_confirm<D: TextDisplay>(
    display: &mut D,
    job: &Job,
) -> Result<(), DisplayError> {
    display.clear().await?;
    display.write_num(job.amount as u32).await?;
    display.write_str("x").await?;
    display.write_num(job.length_mm as u32).await?;
    display.write_str("mm").await?;
    display.text_at(0, 1, "*Back   #Confirm").await
}

/// Render the cutting banner
pub async fn render_cutting<D: TextDisplay>(display: &mut D) -> Result<(), DisplayError> {
    display.clear().await?;
    display.write_str("Cutting").await
}

/// Update the progress counter under the cutting banner, e.g. `2/3`
pub async fn render_progress<D: TextDisplay>(
    display: &mut D,
    piece: u16,
    amount: u16,
) -> Result<(), DisplayError> {
    display.set_cursor(0, 1).await?;
    display.write_num(piece as u32).await?;
    display.write_str("/").await?;
    display.write_num(amount as u32).await
}

/// Render the job finished screen
pub async fn render_done<D: TextDisplay>(display: &mut D) -> Result<(), DisplayError> {
    display.clear().await?;
    display.write_str("Done! # Continue").await
}

/// Render the error screen
pub async fn render_error<D: TextDisplay>(display: &mut D) -> Result<(), DisplayError> {
    display.clear().await?;
    display.write_str("ERROR").await
}
