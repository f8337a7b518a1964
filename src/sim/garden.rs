//! The garden: registry of active vegetables
//!
//! Owns generation, the post-harvest fade, and pruning of faded vegetables.
//! Iteration order is generation order (ascending id) and stays stable.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vegetable::{Vegetable, VegetableKind};
use crate::consts::MAX_VEGETABLE_COUNT;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Garden {
    vegetables: Vec<Vegetable>,
    /// Vegetables created by the last `generate`, pruned ones included
    total: usize,
}

impl Garden {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh random layout: uniform positions in
    /// [0, width-size) x [0, height-size), uniform kind from `catalog`.
    /// Overlaps are allowed.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        catalog: &[VegetableKind],
        field_width: f32,
        field_height: f32,
        vegetable_size: f32,
        fade_duration: u32,
    ) -> Self {
        if catalog.is_empty() {
            log::warn!("Empty vegetable catalog, garden left empty");
            return Self::default();
        }

        if count > MAX_VEGETABLE_COUNT {
            log::warn!(
                "Requested {} vegetables, generating {}",
                count,
                MAX_VEGETABLE_COUNT
            );
        }
        let count = count.min(MAX_VEGETABLE_COUNT);

        let span_x = field_width - vegetable_size;
        let span_y = field_height - vegetable_size;

        let mut vegetables = Vec::with_capacity(count);
        for id in 1..=count as u32 {
            let x = uniform(rng, span_x);
            let y = uniform(rng, span_y);
            let kind = catalog[rng.random_range(0..catalog.len())];
            vegetables.push(Vegetable::new(
                id,
                kind,
                Vec2::new(x, y),
                vegetable_size,
                fade_duration,
            ));
        }

        log::debug!(
            "Generated {} vegetables in {}x{} field",
            count,
            field_width,
            field_height
        );

        Self {
            vegetables,
            total: count,
        }
    }

    /// Advance every harvested vegetable's fade by one frame
    pub fn tick(&mut self) {
        for veg in &mut self.vegetables {
            veg.tick_fade();
        }
    }

    /// Drop fully faded vegetables; uncollected ones are always kept
    pub fn prune(&mut self) {
        self.vegetables.retain(|v| v.is_active());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vegetable> {
        self.vegetables.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vegetable> {
        self.vegetables.iter_mut()
    }

    /// Vegetables still in the active set
    pub fn len(&self) -> usize {
        self.vegetables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vegetables.is_empty()
    }

    /// Total vegetables generated for this layout
    pub fn total(&self) -> usize {
        self.total
    }

    /// Active vegetables not yet harvested
    pub fn remaining(&self) -> usize {
        self.vegetables.iter().filter(|v| !v.is_collected()).count()
    }

    /// Derived from the live set: total minus those still waiting to be harvested
    pub fn collected_count(&self) -> usize {
        self.total - self.remaining()
    }

    #[cfg(test)]
    pub(crate) fn from_vegetables(vegetables: Vec<Vegetable>) -> Self {
        let total = vegetables.len();
        Self { vegetables, total }
    }
}

/// Uniform sample in [0, span); degenerate spans collapse to 0
fn uniform<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    if span > 0.0 {
        rng.random_range(0.0..span)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn garden(seed: u64, count: usize) -> Garden {
        let mut rng = Pcg32::seed_from_u64(seed);
        Garden::generate(&mut rng, count, &VegetableKind::ALL, 800.0, 600.0, 30.0, 30)
    }

    #[test]
    fn test_generate_fresh() {
        let garden = garden(7, 15);
        assert_eq!(garden.len(), 15);
        assert_eq!(garden.total(), 15);
        assert_eq!(garden.collected_count(), 0);
        assert!(garden.iter().all(|v| !v.is_collected() && v.is_visible()));
    }

    #[test]
    fn test_generate_within_bounds() {
        let garden = garden(42, 500);
        for veg in garden.iter() {
            assert!(veg.pos().x >= 0.0 && veg.pos().x < 770.0);
            assert!(veg.pos().y >= 0.0 && veg.pos().y < 570.0);
        }
    }

    #[test]
    fn test_generate_uses_whole_catalog() {
        let garden = garden(3, 300);
        for kind in VegetableKind::ALL {
            assert!(garden.iter().any(|v| v.kind == kind), "{:?} never drawn", kind);
        }
    }

    #[test]
    fn test_generate_single_kind_catalog() {
        let mut rng = Pcg32::seed_from_u64(1);
        let garden = Garden::generate(&mut rng, 20, &[VegetableKind::Carrot], 800.0, 600.0, 30.0, 30);
        assert!(garden.iter().all(|v| v.kind == VegetableKind::Carrot));
    }

    #[test]
    fn test_generate_degenerate_field() {
        let mut rng = Pcg32::seed_from_u64(1);
        let garden = Garden::generate(&mut rng, 4, &VegetableKind::ALL, 20.0, 20.0, 30.0, 30);
        assert_eq!(garden.len(), 4);
        assert!(garden.iter().all(|v| v.pos() == Vec2::ZERO));
    }

    #[test]
    fn test_generate_deterministic_per_seed() {
        let a = garden(99, 15);
        let b = garden(99, 15);
        let pa: Vec<_> = a.iter().map(|v| (v.pos(), v.kind)).collect();
        let pb: Vec<_> = b.iter().map(|v| (v.pos(), v.kind)).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_generate_caps_count() {
        let garden = garden(11, usize::MAX);
        assert_eq!(garden.len(), MAX_VEGETABLE_COUNT);
        assert_eq!(garden.total(), MAX_VEGETABLE_COUNT);
        assert_eq!(garden.iter().last().map(|v| v.id), Some(MAX_VEGETABLE_COUNT as u32));
    }

    #[test]
    fn test_tick_and_prune() {
        let mut garden = garden(5, 3);
        let first = garden.iter().next().map(|v| v.id);
        if let Some(veg) = garden.iter_mut().next() {
            veg.harvest();
        }
        assert_eq!(garden.collected_count(), 1);

        for _ in 0..29 {
            garden.tick();
            garden.prune();
            assert_eq!(garden.len(), 3);
        }
        garden.tick();
        garden.prune();
        assert_eq!(garden.len(), 2);
        assert!(garden.iter().all(|v| Some(v.id) != first));
        // Pruning keeps the derived count stable
        assert_eq!(garden.collected_count(), 1);
        assert_eq!(garden.remaining(), 2);
    }

    #[test]
    fn test_prune_keeps_uncollected() {
        let mut garden = garden(5, 10);
        for _ in 0..100 {
            garden.tick();
            garden.prune();
        }
        assert_eq!(garden.len(), 10);
    }
}
