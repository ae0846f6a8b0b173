use time::OffsetDateTime;

/// Measures the wall time of a phase, for log output.
pub struct Stopwatch {
    start: OffsetDateTime,
}

impl Stopwatch {
    pub fn start() -> Stopwatch {
        Stopwatch {
            start: OffsetDateTime::now_utc(),
        }
    }

    pub fn elapsed_ms(&self) -> i128 {
        (OffsetDateTime::now_utc() - self.start).whole_milliseconds()
    }
}
