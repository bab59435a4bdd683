use crate::output::print_json;
use crate::session::Session;
use chatscope_aggregate::{
    activity_heatmap, daily_timeline, emoji_analysis, month_activity_map, monthly_timeline,
    most_busy_users, most_common_words, week_activity_map, word_frequencies, ActivityCount,
    BusyUsers, ChatStats, DailyPoint, EmojiCount, Heatmap, MonthlyPoint, WordCount,
};
use chatscope_core::{SenderFilter, OVERALL};
use serde::Serialize;

// ── stats ──

pub fn stats(session: &Session, filter: &SenderFilter, json: bool) -> anyhow::Result<()> {
    let stats =
        chatscope_aggregate::fetch_stats(&session.store, filter, &session.config.media_placeholder);
    if json {
        return print_json(&stats);
    }
    print!("{}", render_stats(filter, &stats));
    if session.stats.malformed_timestamps > 0 {
        println!(
            "  ({} entries skipped: unreadable timestamp)",
            session.stats.malformed_timestamps
        );
    }
    Ok(())
}

fn render_stats(filter: &SenderFilter, s: &ChatStats) -> String {
    format!(
        "Top statistics ({filter})\n  Messages: {}\n  Words:    {}\n  Media:    {}\n  Links:    {}\n",
        s.messages, s.words, s.media, s.links
    )
}

// ── timeline ──

#[derive(Serialize)]
#[serde(untagged)]
enum Timeline {
    Monthly(Vec<MonthlyPoint>),
    Daily(Vec<DailyPoint>),
}

pub fn timeline(
    session: &Session,
    filter: &SenderFilter,
    daily: bool,
    json: bool,
) -> anyhow::Result<()> {
    let timeline = if daily {
        Timeline::Daily(daily_timeline(&session.store, filter))
    } else {
        Timeline::Monthly(monthly_timeline(&session.store, filter))
    };
    if json {
        return print_json(&timeline);
    }
    print!("{}", render_timeline(&timeline));
    Ok(())
}

fn render_timeline(timeline: &Timeline) -> String {
    let rows: Vec<(String, usize)> = match timeline {
        Timeline::Monthly(points) => points.iter().map(|p| (p.label.clone(), p.messages)).collect(),
        Timeline::Daily(points) => points.iter().map(|p| (p.date.to_string(), p.messages)).collect(),
    };
    if rows.is_empty() {
        return "No messages.\n".to_string();
    }
    rows.iter()
        .map(|(label, n)| format!("{label:<16} {n}\n"))
        .collect()
}

// ── activity ──

#[derive(Serialize)]
struct ActivityMaps {
    week: Vec<ActivityCount>,
    month: Vec<ActivityCount>,
}

pub fn activity(
    session: &Session,
    filter: &SenderFilter,
    heatmap: bool,
    json: bool,
) -> anyhow::Result<()> {
    if heatmap {
        let map = activity_heatmap(&session.store, filter);
        if json {
            return print_json(&map);
        }
        print!("{}", render_heatmap(&map));
        return Ok(());
    }

    let maps = ActivityMaps {
        week: week_activity_map(&session.store, filter),
        month: month_activity_map(&session.store, filter),
    };
    if json {
        return print_json(&maps);
    }
    println!("Most busy day");
    print!("{}", render_counts(&maps.week));
    println!("\nMost busy month");
    print!("{}", render_counts(&maps.month));
    Ok(())
}

fn render_counts(counts: &[ActivityCount]) -> String {
    counts
        .iter()
        .map(|c| format!("  {:<10} {}\n", c.name, c.messages))
        .collect()
}

/// One row per weekday, one column per hour (midnight first).
fn render_heatmap(map: &Heatmap) -> String {
    let mut out = String::from("           ");
    for hour in 0..24 {
        out.push_str(&format!("{hour:>4}"));
    }
    out.push('\n');
    for (day, row) in map.weekdays.iter().zip(map.cells.iter()) {
        out.push_str(&format!("{day:<11}"));
        for n in row {
            out.push_str(&format!("{n:>4}"));
        }
        out.push('\n');
    }
    out
}

// ── users ──

#[derive(Serialize)]
struct UsersView {
    /// Selector values, `Overall` first.
    options: Vec<String>,
    busy: BusyUsers,
}

pub fn users(session: &Session, json: bool) -> anyhow::Result<()> {
    let mut options = vec![OVERALL.to_string()];
    options.extend(session.store.participants());
    let view = UsersView {
        options,
        busy: most_busy_users(&session.store, session.config.top_busy_users),
    };
    if json {
        return print_json(&view);
    }
    print!("{}", render_users(&view));
    Ok(())
}

fn render_users(view: &UsersView) -> String {
    let mut out = String::from("Participants\n");
    for name in &view.options {
        out.push_str(&format!("  {name}\n"));
    }
    out.push_str("\nMost busy users\n");
    for s in &view.busy.shares {
        out.push_str(&format!("  {:<20} {:>6} {:>7.2}%\n", s.sender, s.messages, s.percent));
    }
    out
}

// ── words ──

pub fn words(session: &Session, filter: &SenderFilter, all: bool, json: bool) -> anyhow::Result<()> {
    let words = if all {
        word_frequencies(
            &session.store,
            filter,
            &session.stop_words,
            &session.config.media_placeholder,
        )
    } else {
        most_common_words(&session.store, filter, &session.stop_words, &session.config)
    };
    if json {
        return print_json(&words);
    }
    print!("{}", render_words(&words));
    Ok(())
}

fn render_words(words: &[WordCount]) -> String {
    if words.is_empty() {
        return "No words.\n".to_string();
    }
    words
        .iter()
        .map(|w| format!("{:<20} {}\n", w.word, w.count))
        .collect()
}

// ── emoji ──

pub fn emoji(session: &Session, filter: &SenderFilter, json: bool) -> anyhow::Result<()> {
    let emoji = emoji_analysis(&session.store, filter);
    if json {
        return print_json(&emoji);
    }
    print!("{}", render_emoji(&emoji));
    Ok(())
}

fn render_emoji(emoji: &[EmojiCount]) -> String {
    if emoji.is_empty() {
        return "No emoji.\n".to_string();
    }
    emoji
        .iter()
        .map(|e| format!("{}  {:>5} {:>7.2}%\n", e.emoji, e.count, e.percent))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatscope_aggregate::StopWords;
    use chatscope_core::AnalysisConfig;
    use chatscope_transcript::parse_transcript;

    fn session(text: &str) -> Session {
        let parsed = parse_transcript(text);
        Session {
            store: parsed.store,
            stats: parsed.stats,
            config: AnalysisConfig::default(),
            stop_words: StopWords::builtin(),
        }
    }

    const CHAT: &str = "12/05/23, 9:00 AM - Alice: Hello there\n12/05/23, 9:15 AM - Bob: Hi Alice";

    #[test]
    fn stats_text() {
        let s = session(CHAT);
        let stats = chatscope_aggregate::fetch_stats(&s.store, &SenderFilter::Overall, "<Media omitted>");
        let text = render_stats(&SenderFilter::Overall, &stats);
        assert!(text.starts_with("Top statistics (Overall)"));
        assert!(text.contains("Messages: 2"));
        assert!(text.contains("Words:    4"));
    }

    #[test]
    fn timeline_text_and_json_shape() {
        let s = session(CHAT);
        let daily = Timeline::Daily(daily_timeline(&s.store, &SenderFilter::Overall));
        assert_eq!(render_timeline(&daily), format!("{:<16} 2\n", "2023-05-12"));
        let json = serde_json::to_value(&daily).unwrap();
        assert_eq!(json[0]["date"], "2023-05-12");

        let empty = Timeline::Monthly(Vec::new());
        assert_eq!(render_timeline(&empty), "No messages.\n");
    }

    #[test]
    fn heatmap_text_has_header_and_seven_rows() {
        let s = session(CHAT);
        let text = render_heatmap(&activity_heatmap(&s.store, &SenderFilter::Overall));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[5].starts_with("Friday"));
    }

    #[test]
    fn users_view_lists_overall_first() {
        let s = session(CHAT);
        let view = UsersView {
            options: vec![OVERALL.to_string(), "Alice".into(), "Bob".into()],
            busy: most_busy_users(&s.store, 5),
        };
        let text = render_users(&view);
        assert!(text.contains("  Overall\n  Alice\n  Bob\n"));
        assert!(text.contains("50.00%"));
    }
}
