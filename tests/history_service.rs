// tests/history_service.rs
//
// History behavior through `ToneService`: ordering, lookup, eviction and
// concurrent appends.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use email_tone_analyzer::analyze::{KeywordOptions, ToneEngine};
use email_tone_analyzer::ToneService;

#[test]
fn n_analyses_are_stored_in_order_and_found_by_id() {
    let svc = ToneService::default();
    let texts: Vec<String> = (0..25).map(|i| format!("Email number {i} about the budget")).collect();

    let ids: Vec<String> = texts
        .iter()
        .map(|t| {
            let resp = svc.analyze(t);
            assert!(resp.success);
            resp.data.expect("data").id
        })
        .collect();

    let hist = svc.history();
    assert_eq!(hist.len(), texts.len());
    for (i, a) in hist.iter().enumerate() {
        assert_eq!(a.email_content, texts[i]);
        assert_eq!(a.id, ids[i]);
    }
    assert!(hist.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    for id in &ids {
        let found = svc.get_by_id(id).expect("stored analysis");
        assert_eq!(&found.id, id);
    }
    assert!(svc.get_by_id("missing").is_none());
}

#[test]
fn oldest_entries_are_evicted_at_capacity() {
    let svc = ToneService::with_engine(ToneEngine::new(KeywordOptions::default()), 3);
    let ids: Vec<String> = ["one", "two", "three", "four", "five"]
        .iter()
        .map(|t| svc.try_analyze(t).unwrap().id)
        .collect();

    assert_eq!(svc.history_len(), 3);
    let kept: Vec<String> = svc.history().into_iter().map(|a| a.email_content).collect();
    assert_eq!(kept, vec!["three", "four", "five"]);
    assert!(svc.get_by_id(&ids[0]).is_none());
    assert!(svc.get_by_id(&ids[4]).is_some());
}

#[test]
fn concurrent_appends_are_not_lost() {
    let svc = Arc::new(ToneService::default());
    let threads = 8;
    let per_thread = 40;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || {
                (0..per_thread)
                    .map(|i| svc.try_analyze(&format!("thread {t} message {i}")).unwrap().id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all_ids = HashSet::new();
    for h in handles {
        for id in h.join().expect("worker thread") {
            assert!(all_ids.insert(id), "duplicate id");
        }
    }

    let hist = svc.history();
    assert_eq!(hist.len(), threads * per_thread);

    // Each thread's own appends keep their relative order.
    for t in 0..threads {
        let prefix = format!("thread {t} ");
        let seq: Vec<usize> = hist
            .iter()
            .filter_map(|a| a.email_content.strip_prefix(&prefix))
            .filter_map(|rest| rest.strip_prefix("message "))
            .filter_map(|n| n.parse().ok())
            .collect();
        assert_eq!(seq, (0..per_thread).collect::<Vec<_>>());
    }
}

#[test]
fn history_snapshot_is_a_copy() {
    let svc = ToneService::default();
    svc.analyze("first");
    let snap = svc.history();
    svc.analyze("second");
    assert_eq!(snap.len(), 1);
    assert_eq!(svc.history_len(), 2);
}
