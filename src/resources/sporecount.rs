//! The spore economy counter.

use bevy_ecs::prelude::Resource;

/// Number of spores held this session.
///
/// Unsigned on purpose: together with the guarded
/// [`try_spend`](SporeCount::try_spend) there is no code path that can drive
/// the count negative.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SporeCount(u32);

impl SporeCount {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Credit one picked-up spore.
    pub fn collect(&mut self) {
        self.0 += 1;
    }

    /// Pay `cost` spores. Returns false and changes nothing when short.
    pub fn try_spend(&mut self, cost: u32) -> bool {
        if self.0 >= cost {
            self.0 -= cost;
            true
        } else {
            false
        }
    }

    /// Credit a reward.
    pub fn reward(&mut self, amount: u32) {
        self.0 += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_increments_by_one() {
        let mut spores = SporeCount::default();
        spores.collect();
        assert_eq!(spores.get(), 1);
    }

    #[test]
    fn test_try_spend_fails_when_short() {
        let mut spores = SporeCount::default();
        assert!(!spores.try_spend(1));
        assert_eq!(spores.get(), 0);
    }

    #[test]
    fn test_try_spend_succeeds_at_exact_cost() {
        let mut spores = SporeCount::new(1);
        assert!(spores.try_spend(1));
        assert_eq!(spores.get(), 0);
    }

    #[test]
    fn test_reward_adds() {
        let mut spores = SporeCount::new(2);
        spores.reward(3);
        assert_eq!(spores.get(), 5);
    }
}
