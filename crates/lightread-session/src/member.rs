//! Member records.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A book-club member as entered on the join form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Short shareable id, e.g. "LR-4K7Q". Generated once and kept across
    /// profile updates.
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Title of the book the member committed to.
    pub book_title: String,
    /// Meeting day of the week.
    pub day: String,
    pub start_date: NaiveDate,
}

const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ID_LEN: usize = 4;

impl Member {
    /// Generate a short member id: "LR-" plus four base-36 characters.
    pub fn generate_id() -> String {
        Self::generate_id_with(&mut rand::thread_rng())
    }

    pub fn generate_id_with<R: Rng>(rng: &mut R) -> String {
        let suffix: String = (0..ID_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        format!("LR-{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_id_has_expected_shape() {
        let id = Member::generate_id();
        assert_eq!(id.len(), 7);
        assert!(id.starts_with("LR-"));
        assert!(id[3..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn seeded_id_is_deterministic() {
        let a = Member::generate_id_with(&mut StdRng::seed_from_u64(1));
        let b = Member::generate_id_with(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
