use std::time::Duration;

/// Stepped reconnect delays. The last step repeats until [`Backoff::reset`].
#[derive(Debug, Clone)]
pub struct Backoff {
    schedule: Vec<Duration>,
    index: usize,
}

impl Backoff {
    pub fn new(schedule: Vec<Duration>) -> Self {
        Self { schedule, index: 0 }
    }

    /// 0.5s, 0.5s, 1s, 1s, 1s, 2s, 2s, 2s, then 3s.
    pub fn reconnect() -> Self {
        Self::new(vec![
            Duration::from_millis(500),
            Duration::from_millis(500),
            Duration::from_secs(1),
            Duration::from_secs(1),
            Duration::from_secs(1),
            Duration::from_secs(2),
            Duration::from_secs(2),
            Duration::from_secs(2),
            Duration::from_secs(3),
        ])
    }

    /// Delay before the next attempt; advances the schedule.
    pub fn next_delay(&mut self) -> Duration {
        let delay = self
            .schedule
            .get(self.index)
            .cloned()
            .unwrap_or_else(|| Duration::from_secs(1));
        if self.index + 1 < self.schedule.len() {
            self.index += 1;
        }
        delay
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_through_schedule_and_holds_last() {
        let mut b = Backoff::reconnect();
        let delays: Vec<u128> = (0..11).map(|_| b.next_delay().as_millis()).collect();
        assert_eq!(
            delays,
            vec![500, 500, 1000, 1000, 1000, 2000, 2000, 2000, 3000, 3000, 3000]
        );
    }

    #[test]
    fn reset_starts_over() {
        let mut b = Backoff::reconnect();
        b.next_delay();
        b.next_delay();
        b.next_delay();
        b.reset();
        assert_eq!(b.next_delay(), Duration::from_millis(500));
    }

    #[test]
    fn empty_schedule_falls_back_to_one_second() {
        let mut b = Backoff::new(Vec::new());
        assert_eq!(b.next_delay(), Duration::from_secs(1));
    }
}
