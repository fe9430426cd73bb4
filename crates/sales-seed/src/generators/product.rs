//! Product generation with distinct descriptor + noun names.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

use super::GenerationError;

pub const PRODUCT_DESCRIPTORS: [&str; 13] = [
    "Ergonomic",
    "Wireless",
    "Mechanical",
    "Smart",
    "HD",
    "4K",
    "Portable",
    "Compact",
    "Gaming",
    "Premium",
    "Bluetooth",
    "Lightweight",
    "Waterproof",
];

pub const PRODUCT_NOUNS: [&str; 12] = [
    "Keyboard",
    "Mouse",
    "Monitor",
    "Headphones",
    "Webcam",
    "Desk Chair",
    "USB Hub",
    "Laptop Stand",
    "Coffee Mug",
    "Smartwatch",
    "Speaker",
    "Mic",
];

/// Generated product data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedProduct {
    pub name: String,
    pub price: Decimal,
}

/// Generates products with unique names and prices rounded to cents.
pub struct ProductGenerator {
    descriptors: Vec<&'static str>,
    nouns: Vec<&'static str>,
    price_cents: (i64, i64),
    max_attempts: usize,
}

impl ProductGenerator {
    /// Creates a generator over the built-in descriptor and noun lists.
    pub fn new(price_cents: (i64, i64), max_attempts: usize) -> Self {
        Self::with_vocabulary(&PRODUCT_DESCRIPTORS, &PRODUCT_NOUNS, price_cents, max_attempts)
    }

    pub fn with_vocabulary(
        descriptors: &[&'static str],
        nouns: &[&'static str],
        price_cents: (i64, i64),
        max_attempts: usize,
    ) -> Self {
        Self {
            descriptors: descriptors.to_vec(),
            nouns: nouns.to_vec(),
            price_cents,
            max_attempts,
        }
    }

    /// Number of distinct names this generator can produce.
    pub fn name_space(&self) -> usize {
        self.descriptors.len() * self.nouns.len()
    }

    /// Generates `count` products with pairwise distinct names.
    ///
    /// Candidates are drawn independently and rejected when already used. The
    /// request fails up front if it exceeds the name space, and fails after
    /// `max_attempts` draws otherwise.
    pub fn generate_batch(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedProduct>, GenerationError> {
        let available = self.name_space();
        if count > available {
            return Err(GenerationError::NameSpaceExhausted {
                requested: count,
                available,
            });
        }

        let mut used = HashSet::with_capacity(count);
        let mut products = Vec::with_capacity(count);
        let mut attempts = 0;

        while products.len() < count {
            if attempts == self.max_attempts {
                return Err(GenerationError::AttemptsExhausted {
                    what: "product names",
                    attempts,
                });
            }
            attempts += 1;

            let name = self.candidate_name(rng);
            if used.insert(name.clone()) {
                products.push(GeneratedProduct {
                    name,
                    price: self.generate_price(rng),
                });
            }
        }

        Ok(products)
    }

    fn candidate_name(&self, rng: &mut impl Rng) -> String {
        // Vocabularies are non-empty whenever count > 0 passed the space check.
        let descriptor = self.descriptors.choose(rng).copied().unwrap_or_default();
        let noun = self.nouns.choose(rng).copied().unwrap_or_default();
        format!("{descriptor} {noun}")
    }

    fn generate_price(&self, rng: &mut impl Rng) -> Decimal {
        let (low, high) = self.price_cents;
        Decimal::new(rng.gen_range(low..=high), 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn default_gen() -> ProductGenerator {
        ProductGenerator::new((1_500, 35_000), 10_000)
    }

    #[test]
    fn test_names_are_distinct() {
        let mut rng = StdRng::seed_from_u64(12345);
        let products = default_gen().generate_batch(20, &mut rng).unwrap();

        assert_eq!(products.len(), 20);
        let names: HashSet<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn test_names_use_vocabulary() {
        let mut rng = StdRng::seed_from_u64(3);

        for product in default_gen().generate_batch(20, &mut rng).unwrap() {
            let matched = PRODUCT_DESCRIPTORS.iter().any(|d| {
                PRODUCT_NOUNS
                    .iter()
                    .any(|n| product.name == format!("{d} {n}"))
            });
            assert!(matched, "unexpected product name {}", product.name);
        }
    }

    #[test]
    fn test_prices_in_range_with_cents() {
        let mut rng = StdRng::seed_from_u64(42);
        let low = Decimal::new(1_500, 2);
        let high = Decimal::new(35_000, 2);

        for product in default_gen().generate_batch(100, &mut rng).unwrap() {
            assert!(product.price >= low && product.price <= high);
            assert!(product.price.scale() <= 2);
        }
    }

    #[test]
    fn test_full_name_space_terminates() {
        let product_gen = default_gen();
        let mut rng = StdRng::seed_from_u64(8);
        let products = product_gen
            .generate_batch(product_gen.name_space(), &mut rng)
            .unwrap();

        assert_eq!(products.len(), 156);
    }

    #[test]
    fn test_request_beyond_name_space() {
        let product_gen =
            ProductGenerator::with_vocabulary(&["Smart"], &["Mouse", "Mic"], (100, 200), 1_000);
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(
            product_gen.generate_batch(3, &mut rng).unwrap_err(),
            GenerationError::NameSpaceExhausted {
                requested: 3,
                available: 2,
            }
        );
    }

    #[test]
    fn test_attempt_budget_is_enforced() {
        let product_gen = ProductGenerator::new((1_500, 35_000), 5);
        let mut rng = StdRng::seed_from_u64(5);

        let err = product_gen.generate_batch(20, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerationError::AttemptsExhausted {
                what: "product names",
                attempts: 5,
            }
        );
    }
}
