// SPDX-License-Identifier: MIT OR Apache-2.0

//! Placeholder substitution over a normalized document.
//!
//! String scalars may embed `${name}` tokens anywhere. Each token whose name is in
//! the [`SubstitutionTable`] is replaced by the textual form of its value; any other
//! token is left exactly as written, so a later pass with a different table can
//! still resolve it. Mapping keys are never substituted.

use crate::domain::document::Document;
use crate::domain::replacement::SubstitutionTable;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeSet;

/// `${name}` where name is one or more characters other than `}`. `${}` never matches.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

/// Substitutes placeholders in every string scalar of `doc`.
///
/// # Examples
///
/// ```
/// use hexvalues::domain::document::Document;
/// use hexvalues::domain::replacement::SubstitutionTable;
/// use hexvalues::domain::substitution::substitute;
///
/// let table = SubstitutionTable::new().with("a", "x").with("b", "y");
/// let doc = substitute(Document::String("${a}-${b}-${c}".to_string()), &table);
///
/// assert_eq!(doc, Document::String("x-y-${c}".to_string()));
/// ```
pub fn substitute(doc: Document, table: &SubstitutionTable) -> Document {
    match doc {
        Document::String(s) => Document::String(substitute_str(s, table)),
        Document::Mapping(map) => Document::Mapping(
            map.into_iter()
                .map(|(key, value)| (key, substitute(value, table)))
                .collect(),
        ),
        Document::Sequence(seq) => Document::Sequence(
            seq.into_iter()
                .map(|item| substitute(item, table))
                .collect(),
        ),
        other => other,
    }
}

/// Substitutes placeholders in a single string.
pub fn substitute_str(s: String, table: &SubstitutionTable) -> String {
    if table.is_empty() || !PLACEHOLDER.is_match(&s) {
        return s;
    }

    PLACEHOLDER
        .replace_all(&s, |caps: &Captures<'_>| match table.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Collects the names of placeholders still present in `doc`.
///
/// # Examples
///
/// ```
/// use hexvalues::domain::document::Document;
/// use hexvalues::domain::substitution::unresolved_placeholders;
///
/// let doc = Document::Sequence(vec![
///     Document::String("${registryURL}/mlrun".to_string()),
///     Document::Int(1),
/// ]);
///
/// let names = unresolved_placeholders(&doc);
/// assert!(names.contains("registryURL"));
/// ```
pub fn unresolved_placeholders(doc: &Document) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    collect_placeholders(doc, &mut names);
    names
}

fn collect_placeholders(doc: &Document, names: &mut BTreeSet<String>) {
    match doc {
        Document::String(s) => {
            names.extend(PLACEHOLDER.captures_iter(s).map(|caps| caps[1].to_string()));
        }
        Document::Mapping(map) => {
            for value in map.values() {
                collect_placeholders(value, names);
            }
        }
        Document::Sequence(seq) => {
            for item in seq {
                collect_placeholders(item, names);
            }
        }
        _ => {}
    }
}
