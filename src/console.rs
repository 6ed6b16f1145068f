//! Plain-stdout rendering for the non-interactive commands.

use crate::domain::model::*;
use crate::domain::service::Analytics;
use crate::error::Result;
use owo_colors::OwoColorize;

const BAR_WIDTH: usize = 36;

/// Value bar scaled against the table maximum, minimum one cell for any
/// non-zero count.
fn bar(count: u64, max: u64, width: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let cells = ((count as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(cells.max(1))
}

fn sentiment_label(label: &str) -> String {
    match label {
        "positive" => label.green().to_string(),
        "negative" => label.red().to_string(),
        _ => label.yellow().to_string(),
    }
}

fn print_table(title: &str, table: &CountTable) {
    println!("{}", title.bold());
    if table.is_empty() {
        println!("  {}", "(no rows)".dimmed());
        return;
    }
    let max = table.max();
    let label_width = table
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    for (label, count) in table.iter() {
        let styled = if table.dimension == "Sentiment" {
            sentiment_label(label)
        } else {
            label.to_string()
        };
        let pad = " ".repeat(label_width - label.len());
        println!(
            "  {styled}{pad}  {:>6}  {}",
            count,
            bar(count, max, BAR_WIDTH).cyan()
        );
    }
    println!();
}

pub fn print_summary(analytics: &Analytics) {
    println!(
        "{} {} tweets\n",
        "✈".cyan(),
        analytics.len().to_string().bold()
    );
    if analytics.is_empty() {
        return;
    }
    print_table("Tweets by sentiment", &analytics.sentiment_counts());
    print_table("Tweets by airline", &analytics.airline_counts());
    print_table("Top negative reasons", &analytics.negative_reason_counts());
}

pub fn print_summary_json(analytics: &Analytics) -> Result<()> {
    let summary = serde_json::json!({
        "total": analytics.len(),
        "sentiment": analytics.sentiment_counts().rows,
        "airlines": analytics.airline_counts().rows,
        "negativeReasons": analytics.negative_reason_counts().rows,
    });
    let text = serde_json::to_string_pretty(&summary)
        .map_err(crate::error::GeneralError::serialization_error)?;
    println!("{text}");
    Ok(())
}

pub fn print_tweet(tweet: &Tweet) {
    let when = tweet.created_at.format("%Y-%m-%d %H:%M");
    println!(
        "{} {} {} {} {}",
        sentiment_label(tweet.sentiment.label()),
        tweet.airline.to_string().bold(),
        when.to_string().dimmed(),
        format!("#{}", tweet.id).dimmed(),
        match &tweet.author {
            Some(author) => format!("@{author}").dimmed().to_string(),
            None => String::new(),
        }
    );
    println!("  {}\n", tweet.text);
}

pub fn print_tweets(tweets: &[Tweet]) {
    for tweet in tweets {
        print_tweet(tweet);
    }
    println!("{}", format!("{} tweet(s)", tweets.len()).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_against_the_maximum() {
        assert_eq!(bar(10, 10, 10).chars().count(), 10);
        assert_eq!(bar(5, 10, 10).chars().count(), 5);
        assert_eq!(bar(0, 10, 10), "");
        // non-zero counts always show at least one cell
        assert_eq!(bar(1, 10_000, 10).chars().count(), 1);
    }
}
