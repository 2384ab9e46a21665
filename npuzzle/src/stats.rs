use std::ops::AddAssign;

/// Search statistic collector.
/// It collects data during the best-first search of both the board and its twin.
pub trait SearchStatsCollector {
    /// Called before each node expansion, can return false to cancel search process.
    #[inline(always)] fn expanded(&mut self) -> bool { true }
    /// Called with the number of nodes pushed to the frontier by an expansion.
    #[inline(always)] fn generated(&mut self, _count: usize) { }
}

/// Search statistic collector that ignore all events.
impl SearchStatsCollector for () {}

/// Counts expansions.
impl SearchStatsCollector for u64 {
    #[inline(always)] fn expanded(&mut self) -> bool { *self += 1; true }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchAllStats {
    pub expanded: u64,
    pub generated: u64
}

impl SearchAllStats {
    /// Returns number of nodes created, including the roots of both searches.
    pub fn nodes(&self) -> u64 { self.generated + 2 }
}

impl AddAssign for SearchAllStats {
    fn add_assign(&mut self, rhs: Self) {
        self.expanded += rhs.expanded;
        self.generated += rhs.generated;
    }
}

impl SearchStatsCollector for SearchAllStats {
    #[inline(always)] fn expanded(&mut self) -> bool { self.expanded += 1; true }
    #[inline(always)] fn generated(&mut self, count: usize) { self.generated += count as u64; }
}

/// Collects all statistics and cancels the search after `limit` expansions.
#[derive(Copy, Clone, Debug)]
pub struct Limited {
    pub stats: SearchAllStats,
    pub limit: u64
}

impl Limited {
    pub fn with_limit(limit: u64) -> Self { Self { stats: SearchAllStats::default(), limit } }

    pub fn reset_stats(&mut self) { self.stats = SearchAllStats::default(); }

    pub fn reset_limit(&mut self, limit: u64) { self.reset_stats(); self.limit = limit; }
}

impl SearchStatsCollector for Limited {
    #[inline(always)] fn expanded(&mut self) -> bool {
        if self.stats.expanded >= self.limit { return false; }
        self.stats.expanded()
    }

    #[inline(always)] fn generated(&mut self, count: usize) { self.stats.generated(count); }
}
