//! Window lifecycle helpers.

use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

const CLOSE_PROMPT: &str = "Are you sure you want to close the app?";

/// Ask the user to confirm closing the app.
pub async fn confirm_close() -> bool {
    let answer = AsyncMessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Close App")
        .set_description(CLOSE_PROMPT)
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;

    answer == MessageDialogResult::Yes
}
