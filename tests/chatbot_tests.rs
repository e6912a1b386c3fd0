use compliance_api::services::chatbot::{REPLY_PREFIX, generate_reply};

#[test]
fn test_reply_prefix() {
    assert_eq!(generate_reply("hello"), "You said: hello");
    assert!(generate_reply("anything").starts_with(REPLY_PREFIX));
}

#[test]
fn test_empty_message() {
    assert_eq!(generate_reply(""), "You said: ");
}

#[test]
fn test_message_is_not_altered() {
    for msg in ["héllo!", "  spaced  ", "line\nbreak", "<b>html</b>", "You said: twice"] {
        assert_eq!(generate_reply(msg), format!("You said: {msg}"));
    }
}
