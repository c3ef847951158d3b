//! Native dialog helpers

use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

/// Blocking failure notification
pub async fn alert(title: &str, description: &str) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}

/// Ask the user to confirm a destructive action
pub async fn confirm(title: &str, description: &str) -> bool {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await
        == MessageDialogResult::Yes
}
