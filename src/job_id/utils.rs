use crate::error::JobIdError;
use tracing::debug;

pub(super) const SEPARATOR: char = '_';

const HASH_SEED: i32 = 17;
const HASH_MULTIPLIER: i32 = 37;

/// Splits `<prefix>_<epoch>_<sequence>` into its numeric components.
///
/// The prefix token is positional only, its content is never checked. Tokens after the
/// sequence are ignored.
pub(super) fn parse_components(input: &str) -> Result<(i64, i64), JobIdError> {
    let mut tokens = input.trim().split(SEPARATOR).skip(1);

    match (tokens.next(), tokens.next()) {
        (Some(epoch), Some(sequence)) => {
            let epoch = parse_component(input, epoch)?;
            let sequence = parse_component(input, sequence)?;
            Ok((epoch, sequence))
        }
        _ => Err(reject(input, "fewer than three '_' separated tokens")),
    }
}

fn parse_component(input: &str, token: &str) -> Result<i64, JobIdError> {
    token.parse::<i64>().map_err(|e| reject(input, &e.to_string()))
}

fn reject(input: &str, reason: &str) -> JobIdError {
    debug!(input, reason, "JobId: Rejecting malformed job id");
    JobIdError::InvalidFormat {
        input: input.to_string(),
    }
}

/// Seeded multiply-and-add combination of 64 bit fields, stable across processes.
pub(super) fn combine_hash(fields: &[i64]) -> i32 {
    fields.iter().fold(HASH_SEED, |total, &field| {
        total
            .wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(fold_i64(field))
    })
}

#[inline]
fn fold_i64(value: i64) -> i32 {
    // high and low words xor'ed together, the upper shift is logical
    (value ^ ((value as u64) >> 32) as i64) as i32
}
