//! Closest-weight variant resolution.
//!
//! When a requested weight is unavailable for a family, the nearest
//! available weight is substituted. The italic flag is deliberately NOT
//! matched against availability: the result echoes the target's italic flag
//! even when the catalog offers no such slant for that weight.

use crate::variant::Variant;

/// Resolve the closest available variant for `target` among a family's
/// variant tokens.
///
/// Each token's leading integer is its weight; tokens without a parseable
/// weight are skipped. The candidate minimizing the absolute distance to
/// `target.weight` wins; on an exact tie the first-encountered candidate is
/// kept (iteration order is the catalog's insertion order).
///
/// Returns `None` when no token yields a weight; callers guard the empty
/// case before offering a selection.
pub fn closest_variant<'a, I>(tokens: I, target: Variant) -> Option<Variant>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<u16> = None;
    for token in tokens {
        let Some(weight) = leading_weight(token) else {
            log::debug!("Skipping variant token without a weight: {token:?}");
            continue;
        };
        let better = match best {
            Some(current) => distance(weight, target.weight) < distance(current, target.weight),
            None => true,
        };
        if better {
            best = Some(weight);
        }
    }

    best.map(|weight| Variant::new(weight, target.italic))
}

/// Parse the leading digits of a token as a weight.
fn leading_weight(token: &str) -> Option<u16> {
    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..digits_end].parse::<u16>().ok()
}

fn distance(a: u16, b: u16) -> u16 {
    a.abs_diff(b)
}
