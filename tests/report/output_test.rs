/*!
 * Report Output Tests
 * Layout and ordering of a full run against a fixed probe
 */

use heap_stress::core::limits::MEBIBYTE;
use heap_stress::memory::{
    AllocatorState, Collector, CollectorMode, CpuTarget, MemoryCounters, ProcessMemory,
    SystemMemory,
};
use heap_stress::{StressError, StressResult, StressRun, WorkloadConfig};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Probe with constant counters that records collections
#[derive(Default)]
struct FixedProbe {
    collections: AtomicUsize,
    fail_process: bool,
}

impl Collector for FixedProbe {
    fn collect(&self) -> StressResult<()> {
        self.collections.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn allocator_state(&self) -> StressResult<AllocatorState> {
        Ok(AllocatorState {
            allocated_bytes: 12 * MEBIBYTE,
            heap_size_bytes: 14 * MEBIBYTE,
            committed_bytes: 20 * MEBIBYTE,
        })
    }

    fn mode(&self) -> StressResult<CollectorMode> {
        Ok(CollectorMode::Server)
    }
}

impl MemoryCounters for FixedProbe {
    fn system_memory(&self) -> StressResult<SystemMemory> {
        Ok(SystemMemory {
            total_available_bytes: 2048 * MEBIBYTE,
            memory_load_bytes: 1500 * MEBIBYTE,
        })
    }

    fn process_memory(&self) -> StressResult<ProcessMemory> {
        if self.fail_process {
            return Err(StressError::Unsupported("no process counters here"));
        }

        Ok(ProcessMemory {
            working_set_bytes: 64 * MEBIBYTE,
            ..Default::default()
        })
    }
}

fn tiny_config() -> WorkloadConfig {
    WorkloadConfig {
        tasks: 10,
        iterations: 20,
        sequence_length: 16,
        retention_probability: 0.25,
    }
}

#[test]
fn test_run_prints_sections_in_order() {
    let probe = FixedProbe::default();
    let run = StressRun::new(probe, tiny_config());

    let mut out = Vec::new();
    let summary = run.run(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], format!("CPU Target: {}", CpuTarget::current()));
    assert_eq!(lines[1], "GC Mode: Server");
    assert_eq!(lines[2], "");

    let stats: Vec<usize> = positions(&lines, |l| l == "Memory statistics:");
    let generating = positions(&lines, |l| l == "Generating garbage:");
    let kept = positions(&lines, |l| l.starts_with("- Kept "));
    let completed = positions(&lines, |l| l.starts_with("Completed in "));

    assert_eq!(stats.len(), 2);
    assert_eq!(generating.len(), 1);
    assert_eq!(kept.len(), 1);
    assert_eq!(completed.len(), 1);

    assert!(stats[0] < generating[0]);
    assert!(generating[0] < kept[0]);
    assert!(kept[0] < stats[1]);
    assert!(stats[1] < completed[0]);
    assert_eq!(completed[0], lines.len() - 1);

    assert_eq!(
        lines[kept[0]],
        format!("- Kept {} objects alive", summary.retained)
    );
    assert!(lines[completed[0]].ends_with(" seconds"));
}

#[test]
fn test_every_statistic_is_a_non_negative_integer() {
    let run = StressRun::new(FixedProbe::default(), tiny_config());

    let mut out = Vec::new();
    run.run(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    let values: Vec<&str> = output
        .lines()
        .filter(|l| l.ends_with(" MiB"))
        .collect();
    assert_eq!(values.len(), 30);

    for line in values {
        let (_, value) = line.rsplit_once(": ").unwrap();
        let number = value.trim_end_matches(" MiB").replace(',', "");
        assert!(number.parse::<u64>().is_ok(), "not an integer: {line}");
    }

    assert!(output.contains("- GC Info FragmentedBytes: 2 MiB"));
    assert!(output.contains("- GC Info MemoryLoadBytes: 1,500 MiB"));
    assert!(output.contains("- GC Info HighMemoryLoadThresholdBytes: 1,843 MiB"));
    assert!(output.contains("- Process WorkingSet: 64 MiB"));
}

#[test]
fn test_collection_precedes_every_snapshot() {
    let run = StressRun::new(FixedProbe::default(), tiny_config());

    let summary = run.run(std::io::sink()).unwrap();

    assert_eq!(run.probe().collections.load(Ordering::SeqCst), 2);
    assert_eq!(summary.before, summary.after);
    assert!(summary.retained > 0);
}

#[test]
fn test_counter_failure_aborts_the_run() {
    let probe = FixedProbe {
        fail_process: true,
        ..Default::default()
    };
    let run = StressRun::new(probe, tiny_config());

    let mut out = Vec::new();
    let err = run.run(&mut out).unwrap_err();

    assert!(matches!(err, StressError::Unsupported(_)));
    let output = String::from_utf8(out).unwrap();
    assert!(!output.contains("Generating garbage:"));
}

fn positions(lines: &[&str], predicate: impl Fn(&str) -> bool) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| predicate(line))
        .map(|(i, _)| i)
        .collect()
}
