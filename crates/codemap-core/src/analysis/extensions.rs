//! Extension ranking for the size breakdown chart.
use crate::model::ScanStats;
use compact_str::CompactString;

/// Number of extensions shown in the breakdown chart by default.
pub const DEFAULT_TOP_EXTENSIONS: usize = 8;

/// One extension's share of the scanned bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionShare {
    pub extension: CompactString,
    pub count: u64,
    pub size: u64,
    /// Share of *all* scanned bytes (0.0–100.0), not just of the shown rows.
    pub percent: f64,
}

/// Rank every extension by total size, largest first.
///
/// The sort is stable, so extensions with equal totals keep the order in
/// which the scan first encountered them. When nothing was scanned (or
/// every file is empty) all percentages are zero.
pub fn rank_extensions(stats: &ScanStats) -> Vec<ExtensionShare> {
    let total = stats.total_size();
    let mut shares: Vec<ExtensionShare> = stats
        .extensions()
        .iter()
        .map(|e| ExtensionShare {
            extension: e.extension.clone(),
            count: e.count,
            size: e.size,
            percent: if total > 0 {
                e.size as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();
    shares.sort_by(|a, b| b.size.cmp(&a.size));
    shares
}

/// The `n` largest extensions by total size.
pub fn top_extensions(stats: &ScanStats, n: usize) -> Vec<ExtensionShare> {
    let mut shares = rank_extensions(stats);
    shares.truncate(n);
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_from(files: &[(&str, u64)]) -> ScanStats {
        let mut stats = ScanStats::new();
        for (ext, size) in files {
            stats.record_file(ext, *size);
        }
        stats
    }

    #[test]
    fn shares_are_proportional_to_total() {
        let stats = stats_from(&[(".ts", 300), (".md", 100)]);
        let shares = top_extensions(&stats, DEFAULT_TOP_EXTENSIONS);

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].extension, ".ts");
        assert!((shares[0].percent - 75.0).abs() < f64::EPSILON);
        assert!((shares[1].percent - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let stats = stats_from(&[(".b", 10), (".a", 10), (".c", 20)]);
        let order: Vec<String> = rank_extensions(&stats)
            .into_iter()
            .map(|s| s.extension.to_string())
            .collect();
        assert_eq!(order, [".c", ".b", ".a"]);
    }

    #[test]
    fn top_n_truncates_but_percent_uses_full_total() {
        let files: Vec<(String, u64)> = (0..10).map(|i| (format!(".e{i}"), 10)).collect();
        let mut stats = ScanStats::new();
        for (ext, size) in &files {
            stats.record_file(ext, *size);
        }

        let shares = top_extensions(&stats, 8);
        assert_eq!(shares.len(), 8);
        // 10 of 100 bytes each, not 10 of 80.
        for share in &shares {
            assert!((share.percent - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_total_gives_zero_percent() {
        let stats = stats_from(&[(".txt", 0), (".log", 0)]);
        let shares = top_extensions(&stats, 8);
        assert_eq!(shares.len(), 2);
        assert!(shares.iter().all(|s| s.percent == 0.0));
    }

    #[test]
    fn empty_stats_rank_nothing() {
        assert!(top_extensions(&ScanStats::new(), 8).is_empty());
    }
}
