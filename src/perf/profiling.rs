/// Frame-pipeline instrumentation
/// Lightweight atomic counters; increments compile away unless the
/// `profiling` feature is enabled.
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for the per-frame pipeline stages
pub struct FrameCounters {
    // Selection counters
    pub chunks_selected: AtomicU64,

    // Draw-list counters
    pub draw_list_entries: AtomicU64,
    pub blocks_skipped: AtomicU64,

    // Blit counters
    pub blits_issued: AtomicU64,
    pub blits_skipped: AtomicU64,
    pub pixels_blitted: AtomicU64,

    pub frames_rendered: AtomicU64,
}

impl FrameCounters {
    pub const fn new() -> Self {
        Self {
            chunks_selected: AtomicU64::new(0),
            draw_list_entries: AtomicU64::new(0),
            blocks_skipped: AtomicU64::new(0),
            blits_issued: AtomicU64::new(0),
            blits_skipped: AtomicU64::new(0),
            pixels_blitted: AtomicU64::new(0),
            frames_rendered: AtomicU64::new(0),
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.chunks_selected.store(0, Ordering::Relaxed);
        self.draw_list_entries.store(0, Ordering::Relaxed);
        self.blocks_skipped.store(0, Ordering::Relaxed);
        self.blits_issued.store(0, Ordering::Relaxed);
        self.blits_skipped.store(0, Ordering::Relaxed);
        self.pixels_blitted.store(0, Ordering::Relaxed);
        self.frames_rendered.store(0, Ordering::Relaxed);
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            chunks_selected: self.chunks_selected.load(Ordering::Relaxed),
            draw_list_entries: self.draw_list_entries.load(Ordering::Relaxed),
            blocks_skipped: self.blocks_skipped.load(Ordering::Relaxed),
            blits_issued: self.blits_issued.load(Ordering::Relaxed),
            blits_skipped: self.blits_skipped.load(Ordering::Relaxed),
            pixels_blitted: self.pixels_blitted.load(Ordering::Relaxed),
            frames_rendered: self.frames_rendered.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of counter values at a point in time
#[derive(Debug, Clone, Copy)]
pub struct CounterSnapshot {
    pub chunks_selected: u64,
    pub draw_list_entries: u64,
    pub blocks_skipped: u64,
    pub blits_issued: u64,
    pub blits_skipped: u64,
    pub pixels_blitted: u64,
    pub frames_rendered: u64,
}

impl CounterSnapshot {
    /// Print formatted report
    pub fn print_report(&self) {
        println!("\n=== Frame Counters Report ===");
        println!("\nSelection:");
        println!("  chunks selected:       {:12}", self.chunks_selected);

        println!("\nDraw list:");
        println!("  entries emitted:       {:12}", self.draw_list_entries);
        println!("  invisible skipped:     {:12}", self.blocks_skipped);
        let scanned = self.draw_list_entries + self.blocks_skipped;
        if scanned > 0 {
            let visible_rate = (self.draw_list_entries as f64 / scanned as f64) * 100.0;
            println!("  visible rate:          {:11.2}%", visible_rate);
        }

        println!("\nBlits:");
        println!("  blits issued:          {:12}", self.blits_issued);
        println!("  spriteless skipped:    {:12}", self.blits_skipped);
        println!("  pixels blitted:        {:12}", self.pixels_blitted);

        println!("\nFrames rendered:         {:12}", self.frames_rendered);
        if self.frames_rendered > 0 {
            println!(
                "  blits per frame:       {:12}",
                self.blits_issued / self.frames_rendered
            );
        }
        println!();
    }
}

/// Global frame counters instance
pub static FRAME_COUNTERS: FrameCounters = FrameCounters::new();

/// Macro for incrementing a counter (only when profiling feature is enabled)
#[macro_export]
macro_rules! count_call {
    ($counter:expr) => {
        #[cfg(feature = "profiling")]
        {
            $counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        }
    };
}

/// Macro for adding to a counter (only when profiling feature is enabled)
#[macro_export]
macro_rules! count_add {
    ($counter:expr, $value:expr) => {
        #[cfg(feature = "profiling")]
        {
            $counter.fetch_add($value, std::sync::atomic::Ordering::Relaxed);
        }
    };
}
