use litesvm::types::TransactionResult;
use litesvm::LiteSVM;
use solana_sdk::transaction::Transaction;
use std::collections::HashMap;
use std::sync::Mutex;

// Compute units consumed per instruction, collected across a test binary
struct ComputeMetrics {
    calls: HashMap<String, Vec<u64>>,
}

impl ComputeMetrics {
    fn new() -> Self {
        Self {
            calls: HashMap::new(),
        }
    }

    fn record(&mut self, instruction_name: &str, compute_units: u64) {
        self.calls
            .entry(instruction_name.to_string())
            .or_default()
            .push(compute_units);
    }

    fn print_report(&self) {
        if self.calls.is_empty() {
            return;
        }
        println!("\n{}", "=".repeat(80));
        println!("COMPUTE UNIT USAGE REPORT");
        println!("{}", "=".repeat(80));

        let mut sorted: Vec<_> = self.calls.iter().collect();
        sorted.sort_by_key(|(name, _)| *name);

        for (name, values) in sorted {
            let (Some(min), Some(max)) = (values.iter().min(), values.iter().max()) else {
                continue;
            };
            let sum: u64 = values.iter().sum();
            let avg = sum as f64 / values.len() as f64;

            println!("\n\x1b[32;1m{}\x1b[0m", name);
            println!("  Calls:   {}", values.len());
            println!("  Average: {:.0} CU", avg);
            println!("  Min:     {} CU", min);
            println!("  Max:     {} CU", max);
        }

        println!("\n{}", "=".repeat(80));
    }
}

static METRICS: Mutex<Option<ComputeMetrics>> = Mutex::new(None);

pub fn init_metrics() {
    if let Ok(mut metrics) = METRICS.lock() {
        *metrics = Some(ComputeMetrics::new());
    }
}

pub fn record_compute_units(instruction_name: &str, compute_units: u64) {
    if let Ok(mut metrics) = METRICS.lock() {
        if let Some(m) = metrics.as_mut() {
            m.record(instruction_name, compute_units);
        }
    }
}

pub fn print_metrics_report() {
    if let Ok(metrics) = METRICS.lock() {
        if let Some(m) = metrics.as_ref() {
            m.print_report();
        }
    }
}

/// Sends a transaction, recording compute units only when it succeeds.
pub fn send_and_record(
    svm: &mut LiteSVM,
    tx: Transaction,
    instruction_name: &str,
) -> TransactionResult {
    let result = svm.send_transaction(tx)?;
    record_compute_units(instruction_name, result.compute_units_consumed);
    Ok(result)
}
