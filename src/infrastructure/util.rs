use crate::application::ports::util::SlugGenerator;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// Lower-cases, collapses every run outside `[a-z0-9]` into one hyphen and
/// trims hyphens at either end. Non-ASCII letters count as separators.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        NON_SLUG_RUN
            .replace_all(&lowered, "-")
            .trim_matches('-')
            .to_string()
    }
}
