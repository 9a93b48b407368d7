//! Heap statistics for the console.

use core::fmt;

/// Which memory to report on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "board", derive(defmt::Format))]
pub enum MemoryKind {
    /// On-chip SRAM.
    Internal,
    /// PSRAM.
    External,
}

/// One heap region as seen by the allocator.
#[derive(Clone, Copy, Debug)]
pub struct Region {
    pub kind: MemoryKind,
    pub size: usize,
    pub free: usize,
}

/// Totals over every region of one [`MemoryKind`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "board", derive(defmt::Format))]
pub struct MemoryInfo {
    pub total: usize,
    pub free: usize,
    /// Largest free figure of a single region. The allocator does not
    /// expose fragmentation, so this is an upper bound on the biggest
    /// allocation that can succeed.
    pub largest: usize,
}

impl MemoryInfo {
    #[must_use]
    pub fn from_regions<I>(kind: MemoryKind, regions: I) -> Self
    where
        I: IntoIterator<Item = Region>,
    {
        regions
            .into_iter()
            .filter(|r| r.kind == kind)
            .fold(Self::default(), |acc, r| Self {
                total: acc.total + r.size,
                free: acc.free + r.free,
                largest: acc.largest.max(r.free),
            })
    }
}

impl fmt::Display for MemoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total: {} Free: {} Largest: {}", self.total, self.free, self.largest)
    }
}

/// Query the global `esp-alloc` heap.
#[cfg(feature = "board")]
#[must_use]
pub fn query(kind: MemoryKind) -> MemoryInfo {
    let stats = esp_alloc::HEAP.stats();
    let regions = stats.region_stats.iter().flatten().map(|r| Region {
        kind: if r.capabilities.contains(esp_alloc::MemoryCapability::External) {
            MemoryKind::External
        } else {
            MemoryKind::Internal
        },
        size: r.size,
        free: r.free,
    });
    MemoryInfo::from_regions(kind, regions)
}

/// Log internal heap usage under `label`.
#[cfg(feature = "board")]
pub fn report(label: &str) {
    let MemoryInfo { total, free, largest } = query(MemoryKind::Internal);
    defmt::info!(
        "{} -> Internal Mem: Total Internal: {} Free: {} Largest: {}",
        label,
        total,
        free,
        largest
    );
}
