use rand::Rng;
use std::time::{Duration, Instant};
use tracing::info;

/// A wall-clock timer that logs how long a CLI command took.
pub struct Timer {
    label: String,
    start: Instant,
}

impl Timer {
    pub fn start(label: impl Into<String>) -> Self {
        let label = label.into();
        info!("Starting: {}", label);
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        info!("Finished: {} (took {:.2?})", self.label, self.start.elapsed());
    }
}

/// Title-case a chart slug: `hot-100` → `Hot 100`. Used when a page carries
/// no title at all.
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Politeness delay between consecutive requests: a base plus random jitter.
pub fn jittered_delay(base_ms: u64, jitter_ms: u64) -> Duration {
    let jitter = if jitter_ms == 0 {
        0
    } else {
        rand::rng().random_range(0..=jitter_ms)
    };
    Duration::from_millis(base_ms + jitter)
}
