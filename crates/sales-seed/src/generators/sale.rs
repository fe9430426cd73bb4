//! Sale generation linking existing customers and products.

use rand::Rng;
use rand::seq::SliceRandom;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Generated sale data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedSale {
    pub customer_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub sale_date: PrimitiveDateTime,
}

/// Generates sales over a window ending at a fixed instant.
pub struct SaleGenerator {
    quantity: (i32, i32),
    window: Duration,
    now: OffsetDateTime,
}

impl SaleGenerator {
    /// `now` is the end of the window; sale dates are stored as UTC wall time.
    pub fn new(quantity: (i32, i32), window: Duration, now: OffsetDateTime) -> Self {
        Self {
            quantity,
            window,
            now,
        }
    }

    /// Generates a single sale, or `None` if either id set is empty.
    pub fn generate(
        &self,
        customer_ids: &[i32],
        product_ids: &[i32],
        rng: &mut impl Rng,
    ) -> Option<GeneratedSale> {
        let customer_id = *customer_ids.choose(rng)?;
        let product_id = *product_ids.choose(rng)?;
        let (min_qty, max_qty) = self.quantity;
        let quantity = rng.gen_range(min_qty..=max_qty);

        let offset = rng.gen_range(0..=self.window.whole_seconds());
        let at = (self.now - Duration::seconds(offset)).to_offset(UtcOffset::UTC);

        Some(GeneratedSale {
            customer_id,
            product_id,
            quantity,
            sale_date: PrimitiveDateTime::new(at.date(), at.time()),
        })
    }

    /// Generates `count` sales, or an empty batch if either id set is empty.
    pub fn generate_batch(
        &self,
        count: usize,
        customer_ids: &[i32],
        product_ids: &[i32],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedSale> {
        if customer_ids.is_empty() || product_ids.is_empty() {
            return Vec::new();
        }

        (0..count)
            .filter_map(|_| self.generate(customer_ids, product_ids, rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sale_gen(now: OffsetDateTime) -> SaleGenerator {
        SaleGenerator::new((1, 5), Duration::days(730), now)
    }

    #[test]
    fn test_sales_reference_given_ids() {
        let mut rng = StdRng::seed_from_u64(12345);
        let customers = [3, 7, 11];
        let products = [2, 4];
        let sales = sale_gen(OffsetDateTime::now_utc()).generate_batch(
            200,
            &customers,
            &products,
            &mut rng,
        );

        assert_eq!(sales.len(), 200);
        for sale in &sales {
            assert!(customers.contains(&sale.customer_id));
            assert!(products.contains(&sale.product_id));
        }
    }

    #[test]
    fn test_quantity_and_window_bounds() {
        let mut rng = StdRng::seed_from_u64(77);
        let now = OffsetDateTime::now_utc();
        let earliest = now - Duration::days(730);
        let sales = sale_gen(now).generate_batch(500, &[1], &[1], &mut rng);

        for sale in sales {
            assert!((1..=5).contains(&sale.quantity));
            let at = sale.sale_date.assume_utc();
            assert!(at >= earliest && at <= now, "{at} outside window");
        }
    }

    #[test]
    fn test_every_quantity_appears() {
        let mut rng = StdRng::seed_from_u64(9);
        let sales =
            sale_gen(OffsetDateTime::now_utc()).generate_batch(200, &[1], &[1], &mut rng);

        for qty in 1..=5 {
            assert!(
                sales.iter().any(|s| s.quantity == qty),
                "quantity {qty} never drawn"
            );
        }
    }

    #[test]
    fn test_empty_ids_yield_no_sales() {
        let mut rng = StdRng::seed_from_u64(1);
        let sale_gen = sale_gen(OffsetDateTime::now_utc());

        assert!(sale_gen.generate_batch(10, &[], &[1, 2], &mut rng).is_empty());
        assert!(sale_gen.generate_batch(10, &[1, 2], &[], &mut rng).is_empty());
        assert!(sale_gen.generate(&[], &[1], &mut rng).is_none());
    }
}
