//! Animated background starfield.

use rand::Rng;

/// Stars rendered behind the page
pub const DEFAULT_STAR_COUNT: usize = 100;

/// Twinkle animation delays are spread over one cycle of this length
pub const MAX_TWINKLE_DELAY_SECS: f32 = 4.0;

/// One background star, positioned in percent of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub left_pct: f32,
    pub top_pct: f32,
    pub delay_secs: f32,
}

impl Star {
    /// Inline style placing the star and offsetting its twinkle
    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; animation-delay: {:.3}s;",
            self.left_pct, self.top_pct, self.delay_secs
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Scatter `count` stars uniformly over the viewport.
    pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                left_pct: rng.random_range(0.0..100.0),
                top_pct: rng.random_range(0.0..100.0),
                delay_secs: rng.random_range(0.0..MAX_TWINKLE_DELAY_SECS),
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(StarField::generate(&mut rng, DEFAULT_STAR_COUNT).len(), 100);
        assert!(StarField::generate(&mut rng, 0).is_empty());
    }

    #[test]
    fn stars_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = StarField::generate(&mut rng, 1000);
        for star in field.stars() {
            assert!((0.0..100.0).contains(&star.left_pct));
            assert!((0.0..100.0).contains(&star.top_pct));
            assert!((0.0..MAX_TWINKLE_DELAY_SECS).contains(&star.delay_secs));
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let a = StarField::generate(&mut StdRng::seed_from_u64(3), 50);
        let b = StarField::generate(&mut StdRng::seed_from_u64(3), 50);
        assert_eq!(a, b);
    }

    #[test]
    fn style_places_star() {
        let star = Star {
            left_pct: 12.5,
            top_pct: 50.0,
            delay_secs: 1.25,
        };
        assert_eq!(
            star.style(),
            "left: 12.500%; top: 50.000%; animation-delay: 1.250s;"
        );
    }
}
