use chrono::DateTime;
use chrono_tz::Tz;

use crate::domain::Post;

/// Builds the push message for a batch of new posts: header with keyword and
/// count, construction time, the full detail of the most recent post, and a
/// trailing line for however many posts are not shown.
pub fn format_notification(keyword: &str, new_posts: &[Post], now: DateTime<Tz>) -> String {
    let mut message = format!(
        "\n🔔 {count} new post{s} for \"{keyword}\"\n",
        count = new_posts.len(),
        s = if new_posts.len() == 1 { "" } else { "s" },
    );
    message.push_str(&format!("Time: {}\n", now.format("%Y-%m-%d %H:%M:%S")));

    let Some(latest) = new_posts.first() else {
        return message;
    };

    message.push_str("\n--- Latest post ---\n");
    message.push_str(&latest.text);
    message.push('\n');
    if !latest.author.is_empty() {
        message.push_str(&format!("Author: {}\n", latest.author));
    }
    if !latest.posted_at.is_empty() {
        message.push_str(&format!("Posted: {}\n", latest.posted_at));
    }
    if !latest.link.is_empty() {
        message.push_str(&format!("Link: {}\n", latest.link));
    }

    let rest = new_posts.len() - 1;
    if rest > 0 {
        message.push_str(&format!(
            "\n{rest} more new post{s}\n",
            s = if rest == 1 { "" } else { "s" },
        ));
    }

    message
}
