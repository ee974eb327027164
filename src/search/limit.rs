use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

/// Cooperative cancellation shared between a search and whoever started it.
///
/// Cloning hands out another handle to the same flag. Once triggered,
/// every search holding the flag stops at its next iteration.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn trigger(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// When a rollout loop has to stop: a deadline, an optional rollout cap,
/// and an external interrupt, whichever comes first.
#[derive(Debug, Clone)]
pub struct Limit {
    deadline: Instant,
    rollouts: Option<usize>,
    interrupt: Interrupt,
}

impl Limit {
    pub fn new(budget: Duration, rollouts: Option<usize>, interrupt: Interrupt) -> Self {
        Self {
            deadline: Instant::now() + budget,
            rollouts,
            interrupt,
        }
    }
    pub fn exhausted(&self, done: usize) -> bool {
        self.rollouts.map_or(false, |cap| done >= cap)
            || self.interrupt.is_triggered()
            || Instant::now() >= self.deadline
    }
    /// The share of this limit that worker `i` of `n` runs under.
    /// The deadline and interrupt are shared; the rollout cap is divided.
    pub fn split(&self, i: usize, n: usize) -> Self {
        Self {
            deadline: self.deadline,
            rollouts: self.rollouts.map(|cap| cap / n + usize::from(i < cap % n)),
            interrupt: self.interrupt.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_is_spent() {
        let limit = Limit::new(Duration::ZERO, None, Interrupt::default());
        assert!(limit.exhausted(0));
    }

    #[test]
    fn rollout_cap() {
        let limit = Limit::new(Duration::from_secs(60), Some(10), Interrupt::default());
        assert!(!limit.exhausted(9));
        assert!(limit.exhausted(10));
    }

    #[test]
    fn interrupt_is_shared() {
        let interrupt = Interrupt::default();
        let limit = Limit::new(Duration::from_secs(60), None, interrupt.clone());
        assert!(!limit.exhausted(0));
        interrupt.trigger();
        assert!(limit.exhausted(0));
        assert!(limit.split(1, 4).exhausted(0));
    }

    #[test]
    fn split_caps_sum_to_total() {
        let limit = Limit::new(Duration::from_secs(60), Some(10), Interrupt::default());
        let caps = (0..4)
            .map(|i| limit.split(i, 4))
            .map(|l| (0..).find(|&n| l.exhausted(n)).unwrap())
            .collect::<Vec<usize>>();
        assert_eq!(caps, vec![3, 3, 2, 2]);
    }
}
