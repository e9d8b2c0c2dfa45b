use crate::models::Choice;
use rand::Rng;

/// Left-to-right order in which a question's two options are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOrder([Choice; 2]);

impl DisplayOrder {
    pub const STRAIGHT: DisplayOrder = DisplayOrder([Choice::A, Choice::B]);
    pub const SWAPPED: DisplayOrder = DisplayOrder([Choice::B, Choice::A]);

    pub fn choices(self) -> [Choice; 2] {
        self.0
    }

    /// Slot 0 is the left option, anything else the right one.
    pub fn choice_at(self, slot: usize) -> Choice {
        if slot == 0 { self.0[0] } else { self.0[1] }
    }
}

/// Per-question display orders, decided once when a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShufflePlan {
    entries: Vec<DisplayOrder>,
}

impl ShufflePlan {
    pub fn plan<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let entries = (0..count)
            .map(|_| {
                if rng.gen_bool(0.5) {
                    DisplayOrder::SWAPPED
                } else {
                    DisplayOrder::STRAIGHT
                }
            })
            .collect();
        Self { entries }
    }

    pub fn identity(count: usize) -> Self {
        Self {
            entries: vec![DisplayOrder::STRAIGHT; count],
        }
    }

    pub fn from_entries(entries: Vec<DisplayOrder>) -> Self {
        Self { entries }
    }

    pub fn entry(&self, index: usize) -> DisplayOrder {
        self.entries[index]
    }

    pub fn entries(&self) -> &[DisplayOrder] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_plan_has_one_entry_per_question() {
        let mut rng = StdRng::seed_from_u64(7);
        let plan = ShufflePlan::plan(10, &mut rng);
        assert_eq!(plan.len(), 10);
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_same_seed_same_plan() {
        let a = ShufflePlan::plan(10, &mut StdRng::seed_from_u64(42));
        let b = ShufflePlan::plan(10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_plan_uses_both_orders() {
        let plan = ShufflePlan::plan(200, &mut StdRng::seed_from_u64(1));
        let swapped = plan
            .entries()
            .iter()
            .filter(|e| **e == DisplayOrder::SWAPPED)
            .count();
        // 200 fair flips landing outside 50..150 is astronomically unlikely.
        assert!(swapped > 50 && swapped < 150, "swapped = {}", swapped);
    }

    #[test]
    fn test_entry_reads_are_stable() {
        let plan = ShufflePlan::plan(10, &mut StdRng::seed_from_u64(9));
        let first: Vec<_> = (0..10).map(|i| plan.entry(i)).collect();
        let second: Vec<_> = (0..10).map(|i| plan.entry(i)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_entry_holds_both_choices() {
        let plan = ShufflePlan::plan(50, &mut StdRng::seed_from_u64(3));
        for entry in plan.entries() {
            let [left, right] = entry.choices();
            assert_ne!(left, right);
        }
    }

    #[test]
    fn test_slot_mapping() {
        assert_eq!(DisplayOrder::STRAIGHT.choice_at(0), Choice::A);
        assert_eq!(DisplayOrder::STRAIGHT.choice_at(1), Choice::B);
        assert_eq!(DisplayOrder::SWAPPED.choice_at(0), Choice::B);
        assert_eq!(DisplayOrder::SWAPPED.choice_at(1), Choice::A);
    }

    #[test]
    fn test_identity_plan() {
        let plan = ShufflePlan::identity(3);
        assert!(plan.entries().iter().all(|e| *e == DisplayOrder::STRAIGHT));
    }
}
