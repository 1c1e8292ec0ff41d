//! Blocking user notifications.

/// Show `message` in a browser alert. Outside the browser it is logged.
pub fn notify(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let shown = web_sys::window().is_some_and(|w| w.alert_with_message(message).is_ok());
        if !shown {
            log::warn!("alert unavailable: {message}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::warn!("{message}");
    }
}

/// Surface an error to the user and the console.
pub fn notify_error<E: std::error::Error>(err: &E) {
    log::warn!("user-facing error: {err}");
    notify(&err.to_string());
}
