use actix_session::Session;

/// One-shot flash message for redirect-after-POST feedback.
/// Stored in the cookie session, consumed by the next page render.
pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    session.remove_as::<String>("flash").and_then(|v| v.ok())
}
