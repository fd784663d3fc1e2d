//! Per-turn latency of the lead dialogue engine

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lead_agent_agent::{extract_update, DialogueStateTracker, LeadSession};
use lead_agent_core::LeadContext;

const UTTERANCES: &[&str] = &[
    "Main ecommerce brand run karta hoon",
    "Lead generation ke liye kya best rahega?",
    "Mera budget 50k hai per month",
    "main Rohan sharma hoon",
    "mera number 98765 43210 hai",
];

fn bench_extract_update(c: &mut Criterion) {
    let context = LeadContext::new();
    c.bench_function("extract_update_empty_lead", |b| {
        b.iter(|| {
            for text in UTTERANCES {
                black_box(extract_update(&context, black_box(text)));
            }
        })
    });
}

fn bench_apply(c: &mut Criterion) {
    let tracker = DialogueStateTracker::default();
    let context = LeadContext::new();
    c.bench_function("tracker_apply_single_turn", |b| {
        b.iter(|| black_box(tracker.apply(&context, black_box(UTTERANCES[0]))))
    });
}

fn bench_full_conversation(c: &mut Criterion) {
    c.bench_function("lead_session_full_conversation", |b| {
        b.iter(|| {
            let mut session = LeadSession::new();
            for text in UTTERANCES {
                black_box(session.submit_utterance(text));
            }
            session
        })
    });
}

criterion_group!(
    benches,
    bench_extract_update,
    bench_apply,
    bench_full_conversation
);
criterion_main!(benches);
