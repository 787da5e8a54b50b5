//! Deterministic token corpora for one width.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::str::FromStr;

use dec_codec::{copy_uint, decode, Uint, MAX_DIGITS_ANY};

use crate::config::CorpusConfig;
use crate::error::BenchError;

/// Values of one width alongside the tokens that encode them.
#[derive(Debug, Clone)]
pub struct Corpus<T> {
    pub values: Vec<T>,
    pub tokens: Vec<Vec<u8>>,
}

impl<T> Corpus<T>
where
    T: Uint + TryFrom<u64> + FromStr,
{
    /// Generate `config.tokens` values with digit lengths spread evenly over
    /// `1..=T::MAX_DIGITS`. A `zero_pad_ratio` share of tokens carries leading
    /// zeros, never beyond `T::MAX_DIGITS` total.
    pub fn generate(config: &CorpusConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed ^ u64::from(T::BITS));
        let max = T::MAX.to_u64();
        let mut values = Vec::with_capacity(config.tokens);
        let mut tokens = Vec::with_capacity(config.tokens);
        let mut scratch = [0u8; MAX_DIGITS_ANY];

        while values.len() < config.tokens {
            let digits = rng.gen_range(1..=T::MAX_DIGITS) as u32;
            let upper = 10u64
                .checked_pow(digits)
                .map_or(max, |limit| (limit - 1).min(max));
            let value = T::try_from(rng.gen_range(0..=upper)).unwrap_or(T::MAX);

            let len = copy_uint(&mut scratch, value);
            let room = T::MAX_DIGITS - len;
            let pad = if room > 0 && rng.gen_bool(config.zero_pad_ratio) {
                rng.gen_range(1..=room)
            } else {
                0
            };

            let mut token = vec![b'0'; pad];
            token.extend_from_slice(&scratch[..len]);
            values.push(value);
            tokens.push(token);
        }

        Self { values, tokens }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.tokens.iter().map(Vec::len).sum()
    }

    /// Check that the codec and `str::parse` agree on every token and that
    /// each token decodes to the value it was generated from.
    pub fn verify(&self) -> Result<usize, BenchError> {
        for (token, &value) in self.tokens.iter().zip(&self.values) {
            let codec = decode::<T>(token).ok();
            let reference = std::str::from_utf8(token)
                .ok()
                .and_then(|s| s.parse::<T>().ok());
            if codec != reference || codec != Some(value) {
                return Err(BenchError::Disagreement {
                    bits: T::BITS,
                    token: String::from_utf8_lossy(token).into_owned(),
                    codec: format!("{:?}", codec),
                    reference: format!("{:?}", reference),
                });
            }
        }
        Ok(self.len())
    }
}
