/// Performance measurement utilities
/// Stage timings and counters for the select/sort/draw/present pipeline
pub mod profiling;

pub use profiling::{CounterSnapshot, FrameCounters, FRAME_COUNTERS};

use std::time::{Duration, Instant};

pub struct PerfTimer {
    name: &'static str,
    start: Instant,
}

impl PerfTimer {
    #[inline]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        println!("[PERF] {}: {:.2}ms", self.name, elapsed.as_secs_f64() * 1000.0);
    }
}

/// Accumulated per-stage frame timings
pub struct PerfStats {
    pub select_us: f64,
    pub sort_us: f64,
    pub draw_us: f64,
    pub present_us: f64,
    pub frames: u64,
}

impl PerfStats {
    pub fn new() -> Self {
        Self {
            select_us: 0.0,
            sort_us: 0.0,
            draw_us: 0.0,
            present_us: 0.0,
            frames: 0,
        }
    }

    pub fn add_frame(&mut self, select: Duration, sort: Duration, draw: Duration, present: Duration) {
        self.select_us += select.as_secs_f64() * 1e6;
        self.sort_us += sort.as_secs_f64() * 1e6;
        self.draw_us += draw.as_secs_f64() * 1e6;
        self.present_us += present.as_secs_f64() * 1e6;
        self.frames += 1;
    }

    pub fn print_summary(&self) {
        if self.frames == 0 {
            return;
        }
        let frames = self.frames as f64;
        let total = self.select_us + self.sort_us + self.draw_us + self.present_us;

        println!("\n========== PERFORMANCE SUMMARY ==========");
        println!("Frames:          {:8}", self.frames);
        println!(
            "Chunk Select:    {:8.2}us/frame ({:5.1}%)",
            self.select_us / frames,
            (self.select_us / total) * 100.0
        );
        println!(
            "Depth Sort:      {:8.2}us/frame ({:5.1}%)",
            self.sort_us / frames,
            (self.sort_us / total) * 100.0
        );
        println!(
            "Draw:            {:8.2}us/frame ({:5.1}%)",
            self.draw_us / frames,
            (self.draw_us / total) * 100.0
        );
        println!(
            "Present:         {:8.2}us/frame ({:5.1}%)",
            self.present_us / frames,
            (self.present_us / total) * 100.0
        );
        println!("-----------------------------------------");
        println!("Total:           {:8.2}us/frame", total / frames);
        println!("=========================================\n");
    }
}

impl Default for PerfStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro for easy performance measurement
#[macro_export]
macro_rules! perf_scope {
    ($name:expr) => {
        let _timer = $crate::perf::PerfTimer::new($name);
    };
}
