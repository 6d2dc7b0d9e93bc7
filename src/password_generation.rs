//! Utilities for generating passwords.

use rand::{CryptoRng, Rng};

use crate::Alphabet;

/// Generate a password by independently sampling `len` characters from the given alphabet.
///
/// Indices are drawn uniformly from `0..alphabet.len()`. `rand`'s uniform sampler re-samples
/// instead of taking a modulus, so there is no bias toward the front of the alphabet.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &Alphabet, len: usize) -> crate::Secret
where
    R: Rng + CryptoRng,
{
    let chars = alphabet.as_slice();
    let mut secret = crate::Secret(String::new());
    for _ in 0..len {
        let idx = rng.gen_range(0..chars.len());
        secret.0.push(chars[idx]);
    }
    secret
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::generate_random_password;
    use crate::Alphabet;

    #[test]
    fn length_and_membership() {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet = Alphabet::new("abc!9Z".chars().collect()).unwrap();
        for len in [1, 8, 26, 100] {
            let password = generate_random_password(&mut rng, &alphabet, len);
            assert_eq!(password.as_str().chars().count(), len);
            assert!(password.as_str().chars().all(|ch| alphabet.contains(ch)));
        }
    }

    #[test]
    fn zero_length_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let alphabet = Alphabet::new(vec!['x']).unwrap();
        assert!(generate_random_password(&mut rng, &alphabet, 0).is_empty());
    }

    #[test]
    fn single_character_alphabet() {
        let mut rng = StdRng::seed_from_u64(3);
        let alphabet = Alphabet::new(vec!['q']).unwrap();
        let password = generate_random_password(&mut rng, &alphabet, 12);
        assert_eq!(password.as_str(), "qqqqqqqqqqqq");
    }

    #[test]
    fn every_index_is_reachable() {
        // The first and last characters must both be reachable.
        let mut rng = StdRng::seed_from_u64(42);
        let alphabet = Alphabet::new("0123456789".chars().collect()).unwrap();
        let password = generate_random_password(&mut rng, &alphabet, 2000);
        for ch in alphabet.as_slice() {
            assert!(password.as_str().contains(*ch), "never sampled {:?}", ch);
        }
    }

    #[test]
    fn seeded_output_is_reproducible() {
        let alphabet = Alphabet::new("abcdefgh".chars().collect()).unwrap();
        let a = generate_random_password(&mut StdRng::seed_from_u64(99), &alphabet, 16);
        let b = generate_random_password(&mut StdRng::seed_from_u64(99), &alphabet, 16);
        assert_eq!(a, b);
    }
}
