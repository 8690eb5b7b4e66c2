/// An hour pointer walking one simulated day.
///
/// Unlike a bounded iterator the clock can run past the end of the day:
/// discharge hours are never clamped, and [`Clock::overrun`] reports how far
/// past the day boundary the pointer went.
///
/// # Examples
///
/// ```
/// use solar_light_sim::sim::clock::Clock;
///
/// let mut clock = Clock::new(24);
/// let mut hours = Vec::new();
///
/// clock.run_until(3, |hour| hours.push(hour));
/// assert_eq!(hours, vec![0, 1, 2]);
/// assert_eq!(clock.hour(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Clock {
    /// Next hour to be simulated
    current: usize,
    /// Hours in the simulated day
    total: usize,
}

impl Clock {
    /// Creates a clock at hour 0 for a day of `total` hours.
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    /// Returns the current hour and advances by one.
    pub fn tick(&mut self) -> usize {
        let hour = self.current;
        self.current += 1;
        hour
    }

    /// Calls `f` with each hour until the pointer reaches `limit`.
    ///
    /// Does nothing if the pointer is already at or past `limit`.
    pub fn run_until(&mut self, limit: usize, mut f: impl FnMut(usize)) {
        while self.current < limit {
            f(self.tick());
        }
    }

    /// Calls `f` for exactly `count` hours, regardless of the day boundary.
    pub fn run_for(&mut self, count: usize, mut f: impl FnMut(usize)) {
        for _ in 0..count {
            f(self.tick());
        }
    }

    pub fn hour(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Hours ticked beyond the end of the day.
    pub fn overrun(&self) -> usize {
        self.current.saturating_sub(self.total)
    }
}
