//! End-to-end smoke tests for the cold-cache sweeps and the reporter.

use coldfind::bench::sweep::{SweepConfig, find_sweep, lower_bound_sweep};
use coldfind::bench::table::WidthReport;
use coldfind::element::WideKey16;
use coldfind::search::{
    quaternary_lower_bound, std_find, std_lower_bound, vector_scan_u32, vector_scan_unrolled_u32,
};

fn small_config() -> SweepConfig {
    SweepConfig::new(128).with_trials(2).with_raw_size(1 << 12)
}

#[test]
fn find_sweep_produces_a_full_table() {
    let table = find_sweep::<u32, _>(&small_config(), vector_scan_u32).unwrap();

    let counts: Vec<usize> = table.element_counts().collect();
    assert_eq!(counts, vec![8, 16, 32, 64]);
    for element_count in counts {
        for query_count in [1usize, 2, 4] {
            assert!(
                table.get(element_count, query_count).is_some(),
                "missing cell ({element_count}, {query_count})"
            );
        }
    }
}

#[test]
fn lower_bound_sweep_produces_a_full_table() {
    let table = lower_bound_sweep::<WideKey16, _>(&small_config(), quaternary_lower_bound).unwrap();

    let counts: Vec<usize> = table.element_counts().collect();
    assert_eq!(counts, vec![8, 16, 32, 64]);
    // 16x query growth stops below the element count.
    assert!(table.get(64, 1).is_some());
    assert!(table.get(64, 16).is_some());
    assert!(table.get(64, 256).is_none());
}

#[test]
fn comparing_a_report_with_itself_is_unity() {
    let mut report = WidthReport::new();
    report.insert(4, find_sweep::<u32, _>(&small_config(), std_find).unwrap());
    report.insert(
        8,
        find_sweep::<u64, _>(&small_config(), std_find).unwrap(),
    );

    let ratios = report.compare(&report.clone()).unwrap();
    assert!(ratios.all_cells(|r| r == 1.0));
}

#[test]
fn comparing_mismatched_reports_fails() {
    let mut wide = WidthReport::new();
    wide.insert(4, find_sweep::<u32, _>(&small_config(), std_find).unwrap());
    wide.insert(8, find_sweep::<u64, _>(&small_config(), std_find).unwrap());

    let mut narrow = WidthReport::new();
    narrow.insert(
        4,
        find_sweep::<u32, _>(&small_config(), vector_scan_unrolled_u32).unwrap(),
    );

    // Baseline keys must all exist in the contender.
    assert!(wide.compare(&narrow).is_err());
    // The narrower report's keys are covered the other way around.
    assert!(narrow.compare(&wide).is_ok());
}

#[test]
fn degenerate_configs_are_rejected() {
    let too_small = SweepConfig::new(1 << 12).with_raw_size(1 << 10);
    assert!(find_sweep::<u32, _>(&too_small, std_find).is_err());
    assert!(lower_bound_sweep::<u32, _>(&too_small, std_lower_bound).is_err());
}

#[test]
fn human_rendering_of_a_real_sweep() {
    let table = find_sweep::<u32, _>(&small_config(), std_find).unwrap();
    let mut out = Vec::new();
    table.write_csv(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("query count, 1, 2, 4\n"));
    assert!(text.lines().any(|line| line.starts_with("64, ")));
}
