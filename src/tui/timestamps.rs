use chrono::{DateTime, Local, Utc};

/// Age label for a history entry.
///
/// Entries only live as long as the process, so anything older than a
/// day falls back to the local date and time.
pub fn format_saved_at(saved_at: &DateTime<Utc>) -> String {
    format_saved_at_relative_to(saved_at, &Utc::now())
}

fn format_saved_at_relative_to(saved_at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*saved_at);

    match elapsed.num_minutes() {
        m if m < 1 => "just now".to_string(),
        m if m < 60 => format!("{}m ago", m),
        m if m < 24 * 60 => format!("{}h ago", m / 60),
        _ => saved_at.with_timezone(&Local).format("%b %-d %H:%M").to_string(),
    }
}
