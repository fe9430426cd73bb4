//! Customer generation.

use std::collections::HashSet;

use fake::{
    Fake,
    faker::name::en::{FirstName, LastName},
};
use rand::Rng;

use super::GenerationError;

const EMAIL_DOMAINS: [&str; 4] = ["gmail.com", "outlook.com", "yahoo.com", "example.org"];

/// Generated customer data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Generates customers whose emails are unique within one generator.
pub struct CustomerGenerator {
    max_attempts: usize,
    used_emails: HashSet<String>,
}

impl CustomerGenerator {
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            used_emails: HashSet::new(),
        }
    }

    /// Generates a single customer.
    pub fn generate(&mut self, rng: &mut impl Rng) -> Result<GeneratedCustomer, GenerationError> {
        let first_name: String = FirstName().fake_with_rng(rng);
        let last_name: String = LastName().fake_with_rng(rng);

        for _ in 0..self.max_attempts {
            let email = generate_email(&first_name, &last_name, rng);
            if self.used_emails.insert(email.clone()) {
                return Ok(GeneratedCustomer {
                    first_name,
                    last_name,
                    email,
                });
            }
        }

        Err(GenerationError::AttemptsExhausted {
            what: "customer emails",
            attempts: self.max_attempts,
        })
    }

    /// Generates multiple customers.
    pub fn generate_batch(
        &mut self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedCustomer>, GenerationError> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

/// Generates an email from a name.
fn generate_email(first_name: &str, last_name: &str, rng: &mut impl Rng) -> String {
    let normalize = |part: &str| -> String {
        part.to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect()
    };

    let suffix: u32 = rng.gen_range(1..10_000);
    let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];

    format!(
        "{}.{}{suffix}@{domain}",
        normalize(first_name),
        normalize(last_name)
    )
}
