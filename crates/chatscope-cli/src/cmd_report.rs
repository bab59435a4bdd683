use crate::output::{print_json, write_atomic};
use crate::session::{read_scores, Session};
use chatscope_aggregate::Report;
use chatscope_core::SenderFilter;
use std::path::Path;

pub struct ReportParams<'a> {
    pub filter: &'a SenderFilter,
    pub scores: Option<&'a Path>,
    pub out: Option<&'a Path>,
}

/// Build the full report and write it to `out` (atomically) or stdout.
pub fn execute(session: &Session, params: &ReportParams<'_>) -> anyhow::Result<()> {
    let scores = params.scores.map(read_scores).transpose()?;
    let report = Report::build(
        &session.store,
        params.filter,
        &session.config,
        &session.stop_words,
        scores.as_deref(),
    );
    if let Some(err) = &report.sentiment_error {
        tracing::warn!(error = %err, "sentiment section omitted");
    }

    match params.out {
        Some(path) => {
            let json = serde_json::to_string_pretty(&report)?;
            write_atomic(path, json.as_bytes())?;
            println!("Report for {} written to {}", report.selected_user, path.display());
            Ok(())
        }
        None => print_json(&report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatscope_aggregate::StopWords;
    use chatscope_core::AnalysisConfig;
    use chatscope_transcript::parse_transcript;

    #[test]
    fn report_written_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let parsed = parse_transcript(
            "12/05/23, 9:00 AM - Alice: Hello there\n12/05/23, 9:15 AM - Bob: Hi Alice",
        );
        let session = Session {
            store: parsed.store,
            stats: parsed.stats,
            config: AnalysisConfig::default(),
            stop_words: StopWords::builtin(),
        };
        let scores = tmp.path().join("scores.jsonl");
        // One triple for two messages: sentiment is dropped, the rest stays.
        std::fs::write(&scores, "{\"pos\":1,\"neg\":0,\"neu\":0}\n").unwrap();
        let out = tmp.path().join("report.json");

        execute(
            &session,
            &ReportParams {
                filter: &SenderFilter::Overall,
                scores: Some(&scores),
                out: Some(&out),
            },
        )
        .unwrap();

        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(v["stats"]["messages"], 2);
        assert_eq!(v["stats"]["words"], 4);
        assert_eq!(v["daily_timeline"][0]["date"], "2023-05-12");
        assert!(v.get("sentiment").is_none());
        assert!(v["sentiment_error"].as_str().unwrap().contains("misaligned"));
    }
}
