//! Share slugs: a URL-safe form of the name plus a random hex suffix.

use rand::Rng;

use crate::domain::foundation::Slug;

/// Used when nothing of the name survives normalization.
const FALLBACK_BASE: &str = "character";

/// Lowercases, strips everything but `[a-z0-9]`, whitespace and hyphens,
/// turns whitespace runs into single hyphens and trims hyphens at the ends.
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
    }
    out
}

/// `slugify(name)` followed by `-` and two random bytes as four hex digits.
pub fn generate_slug(name: &str) -> Slug {
    generate_slug_with(name, &mut rand::thread_rng())
}

pub fn generate_slug_with<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Slug {
    let mut base = slugify(name);
    if base.is_empty() {
        base.push_str(FALLBACK_BASE);
    }
    let suffix: u16 = rng.gen();
    Slug::from_generated(format!("{}-{:04x}", base, suffix))
}
