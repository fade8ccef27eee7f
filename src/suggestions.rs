//! # Error Suggestions
//!
//! Helpers that turn library errors into messages that say what went
//! wrong AND how to fix it.
//!
//! ```rust,ignore
//! use subrepo_sync::suggestions;
//!
//! if let Err(Error::UnknownComponents { names }) = selection.resolve(&mapping) {
//!     eprintln!("{}", suggestions::unknown_components(&names, &mapping));
//! }
//! ```

use crate::mapping::RemoteMapping;

/// Message for an explicit selection that names unmapped components.
///
/// Lists every unknown name, suggests close matches for typos, and shows
/// the components that are available.
pub fn unknown_components(names: &[String], mapping: &RemoteMapping) -> String {
    let known: Vec<&str> = mapping.iter().map(|(component, _)| component).collect();

    let did_you_mean: String = names
        .iter()
        .filter_map(|name| {
            find_similar(name, &known)
                .map(|s| format!("\nhint: Did you mean '{s}' instead of '{name}'?"))
        })
        .collect();

    format!(
        "unknown components: {unknown}{did_you_mean}\n\n\
         Known components are: {known}\n\
         hint: Map a new component with --remote <component>=<remote>",
        unknown = names.join(", "),
        known = known.join(", ")
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Levenshtein distance, two-row variant.
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0usize; b_chars.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != *b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}
