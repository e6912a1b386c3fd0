pub const REPLY_PREFIX: &str = "You said: ";

/// Builds the reply for a chat message. The message is echoed back verbatim
/// behind [`REPLY_PREFIX`].
pub fn generate_reply(user_msg: &str) -> String {
    format!("{REPLY_PREFIX}{user_msg}")
}
