use chrono::{DateTime, TimeDelta, Utc};
use rishort_core::AppViewModel;

/// Renders the view as terminal lines.
pub fn render(view: &AppViewModel, now: DateTime<Utc>) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(url_error) = &view.url_error {
        lines.push(format!("{}: {}", view.long_url, url_error));
    }

    if view.is_loading {
        lines.push(format!("{} {}", view.submit_label.as_str(), view.long_url));
    }

    if let Some(error) = &view.error {
        lines.push(error.clone());
    }

    if let Some(short_url) = &view.short_url {
        lines.push(format!("Your shortened URL: {short_url}"));
        if let Some(expiration) = &view.expiration_text {
            match view.expires_in_seconds.and_then(|secs| expires_at(now, secs)) {
                Some(at) => lines.push(format!(
                    "{expiration} ({})",
                    at.format("%Y-%m-%d %H:%M UTC")
                )),
                None => lines.push(expiration.clone()),
            }
        }
        if view.copied {
            lines.push(view.copy_label().to_string());
        }
    }

    lines
}

fn expires_at(now: DateTime<Utc>, seconds: u64) -> Option<DateTime<Utc>> {
    let seconds = i64::try_from(seconds).ok()?;
    now.checked_add_signed(TimeDelta::try_seconds(seconds)?)
}
