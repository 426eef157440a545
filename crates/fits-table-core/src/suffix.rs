//! Filename suffix resolution.
//!
//! Both conversion directions answer the same question about every input:
//! does this name end in a recognized (format extension, compression suffix)
//! combination, and what is the name with that combination stripped?
//!
//! [`SuffixSet`] precomputes the cross product of the two suffix lists in
//! precedence order (extension-major) and answers with a single scan over
//! the precomputed combinations, returning on the first match.

use std::path::Path;

/// A successfully resolved filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Basename with the matched suffix removed.
    pub base: String,
    /// The suffix combination that matched, e.g. `.fits.gz`.
    pub suffix: String,
}

/// An ordered set of recognized suffix combinations.
///
/// Built from an ordered list of primary extensions and an ordered list of
/// compression suffixes. Precedence is extension-major: every compression
/// variant of the first extension is tried before any variant of the
/// second.
#[derive(Debug, Clone)]
pub struct SuffixSet {
    combinations: Vec<String>,
}

impl SuffixSet {
    /// Build the cross product of `extensions` and `compressions`, in
    /// precedence order.
    pub fn new(extensions: &[&str], compressions: &[&str]) -> Self {
        let mut combinations = Vec::with_capacity(extensions.len() * compressions.len());
        for ext in extensions {
            for comp in compressions {
                combinations.push(format!("{ext}{comp}"));
            }
        }
        SuffixSet { combinations }
    }

    /// The set accepted by FITS-reading tools: `.fit` or `.fits`,
    /// optionally followed by `.gz` or `.fz`.
    pub fn fits_input() -> Self {
        Self::new(&[".fit", ".fits"], &["", ".gz", ".fz"])
    }

    /// The set accepted by CSV-reading tools: `.csv`, optionally followed
    /// by `.gz`.
    pub fn csv_input() -> Self {
        Self::new(&[".csv"], &["", ".gz"])
    }

    /// Resolve `filename` against this set.
    ///
    /// The name is first reduced to its basename. The first combination
    /// (in precedence order) that the basename ends with wins; the match
    /// is byte-exact and case-sensitive, and the suffix is removed by
    /// exact trailing-substring removal. Returns `None` when no
    /// combination matches.
    pub fn resolve(&self, filename: &str) -> Option<Resolved> {
        let name = basename(filename);
        self.combinations.iter().find_map(|suffix| {
            name.strip_suffix(suffix.as_str()).map(|base| Resolved {
                base: base.to_string(),
                suffix: suffix.clone(),
            })
        })
    }
}

/// Reduce a path string to its final component.
///
/// Has no failure mode: names that `Path` cannot decompose come back
/// unchanged.
pub fn basename(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename)
}

/// Compose an output filename from a resolved base.
///
/// The order is fixed: target extension first, then `.gz` when gzip output
/// was requested, then `.fz` when fpack naming was requested. The two
/// flags are independent.
pub fn output_name(base: &str, target_ext: &str, gzip: bool, fpack: bool) -> String {
    let mut name = format!("{base}{target_ext}");
    if gzip {
        name.push_str(".gz");
    }
    if fpack {
        name.push_str(".fz");
    }
    name
}
