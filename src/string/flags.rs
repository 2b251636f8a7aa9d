//! CLI flag matcher
//!
//! Small helper for hand-rolled argument parsing: tests whether a CLI
//! argument matches a flag name in any of its accepted spellings.

use crate::string::{normalize, validate, NormalizeOptions};

/// Options for [`test_flag`] and [`test_flags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagOptions {
    /// Accept single-dash spellings (`-target` next to `--target`).
    pub allow_single_dash: bool,
    /// Accept the first letter of the target as a quick flag (`--t`, and
    /// `-t` when single-dash is also on).
    pub allow_quick_flag: bool,
    /// Normalize the argument and target before comparing, so `--TeSt `
    /// matches `test`. When off, only a trim is applied.
    pub normalize: bool,
}

impl Default for FlagOptions {
    fn default() -> Self {
        FlagOptions {
            allow_single_dash: true,
            allow_quick_flag: false,
            normalize: true,
        }
    }
}

/// Tests whether a CLI argument matches a flag name.
///
/// Builds the candidate spellings from the target per the options, then
/// checks exact membership of the argument. An empty argument or target
/// never matches.
///
/// # Arguments
///
/// * `arg` - The CLI argument as received, e.g. `"--test"`
/// * `target` - The bare flag name, e.g. `"test"`
/// * `options` - Accepted spellings, see [`FlagOptions`]
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::{test_flag, FlagOptions};
///
/// assert!(test_flag("--test", "test", &FlagOptions::default()));
/// assert!(test_flag("-test", "test", &FlagOptions::default()));
/// assert!(!test_flag("test", "test", &FlagOptions::default()));
/// ```
pub fn test_flag(arg: &str, target: &str, options: &FlagOptions) -> bool {
    let clean = |s: &str| {
        if options.normalize {
            normalize(s, &NormalizeOptions::default())
        } else {
            s.trim().to_string()
        }
    };

    let to_test = clean(arg);
    let against = clean(target);
    if !validate(&to_test) || !validate(&against) {
        return false;
    }

    let mut candidates = vec![format!("--{against}")];
    if options.allow_single_dash {
        candidates.push(format!("-{against}"));
    }
    if options.allow_quick_flag {
        if let Some(first) = against.chars().next() {
            candidates.push(format!("--{first}"));
            if options.allow_single_dash {
                candidates.push(format!("-{first}"));
            }
        }
    }

    candidates.contains(&to_test)
}

/// Tests whether any argument of a slice matches a flag name.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::{test_flags, FlagOptions};
///
/// assert!(test_flags(&["--hi", "--hello", "whatever"], "hi", &FlagOptions::default()));
/// assert!(!test_flags(&["--hi", "whatever"], "hello", &FlagOptions::default()));
/// ```
pub fn test_flags(args: &[&str], target: &str, options: &FlagOptions) -> bool {
    args.iter().any(|arg| test_flag(arg, target, options))
}
