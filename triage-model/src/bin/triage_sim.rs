//! Queue-simulation walkthrough.
//!
//! Generates a reproducible batch of patient records, registers them in
//! the identifier-keyed registry, runs them through the unbounded waiting
//! line and the fixed-capacity lab stage, then prints the merge-sorted
//! triage order. Run with `RUST_LOG=trace` to watch registry growth and
//! record creation.

use std::error::Error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use triage_collections::{ChainedMap, LinkedQueue, RingBuffer, merge_sort};
use triage_model::{PatientRecord, RecordFactory};

#[derive(Debug, Parser)]
#[command(name = "triage-sim", about = "Deterministic triage queue simulation")]
struct Args {
    /// Number of patient records to generate.
    #[arg(long, default_value_t = 20)]
    patients: usize,

    /// Seed for the demographic generator.
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Slot count of the lab processing stage.
    #[arg(long, default_value_t = 4)]
    lab_capacity: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Admissions: every record goes into the registry and the waiting line.
    let mut factory = RecordFactory::from_seed(args.seed);
    let mut registry: ChainedMap<PatientRecord> = ChainedMap::new();
    let mut waiting: LinkedQueue<String> = LinkedQueue::new();

    for _ in 0..args.patients {
        let record = factory.create();
        waiting.enqueue(record.nhs_number().to_string());
        registry.put(record.nhs_number().to_string(), record);
    }
    info!(
        patients = args.patients,
        registry = registry.len(),
        "admissions complete"
    );

    // Lab stage: a bounded pool. A rejected sample waits until a slot
    // frees up, which is the pool's contract rather than a failure.
    let mut lab: RingBuffer<String> = RingBuffer::new(args.lab_capacity)?;
    let mut processed = 0usize;

    while let Some(id) = waiting.dequeue() {
        let mut pending = Some(id);
        while let Some(sample) = pending.take() {
            if let Err(rejected) = lab.enqueue(sample) {
                if let Some(done) = lab.dequeue() {
                    report_processed(&registry, &done);
                    processed += 1;
                }
                pending = Some(rejected.into_inner());
            }
        }
    }
    while let Some(done) = lab.dequeue() {
        report_processed(&registry, &done);
        processed += 1;
    }
    info!(processed, "lab stage drained");

    // Prioritized view: copy the registry out and merge-sort by the
    // record's own order (priority, then arrival).
    let records: Vec<PatientRecord> = registry.iter().map(|(_, r)| r.clone()).collect();
    let triage_order = merge_sort(records);

    println!("Prioritised triage order:");
    for record in &triage_order {
        println!("  {record}  [{}]", record.current_status());
    }

    if let Some(top) = triage_order.first() {
        println!("History for most urgent patient {}:", top.nhs_number());
        for entry in top.history() {
            println!("  - {entry}");
        }
    }

    Ok(())
}

fn report_processed(registry: &ChainedMap<PatientRecord>, id: &str) {
    if let Some(record) = registry.get(id) {
        println!("Lab processed: {record}");
    }
}
