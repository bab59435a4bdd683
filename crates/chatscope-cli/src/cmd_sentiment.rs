use crate::output::print_json;
use crate::session::{read_scores, Session};
use chatscope_aggregate::{sentiment_tally, SenderCount, SentimentTally};
use chatscope_core::SenderFilter;
use std::path::Path;

pub fn execute(
    session: &Session,
    scores_path: &Path,
    filter: &SenderFilter,
    json: bool,
) -> anyhow::Result<()> {
    let scores = read_scores(scores_path)?;
    let tally = sentiment_tally(
        &session.store,
        &scores,
        filter,
        session.config.top_sentiment_users,
    )?;
    if json {
        return print_json(&tally);
    }
    print!("{}", render(&tally));
    Ok(())
}

fn render(tally: &SentimentTally) -> String {
    let mut out = format!(
        "Sentiment: {} positive, {} neutral, {} negative\n",
        tally.totals.positive, tally.totals.neutral, tally.totals.negative
    );
    for (title, senders) in [
        ("Most positive users", &tally.positive),
        ("Most neutral users", &tally.neutral),
        ("Most negative users", &tally.negative),
    ] {
        out.push_str(&format!("\n{title}\n"));
        out.push_str(&render_senders(senders));
    }
    out
}

fn render_senders(senders: &[SenderCount]) -> String {
    if senders.is_empty() {
        return "  (none)\n".to_string();
    }
    senders
        .iter()
        .map(|s| format!("  {:<20} {}\n", s.sender, s.messages))
        .collect()
}
