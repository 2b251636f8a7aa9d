//! String utility functions
//!
//! This module provides the string manipulation half of the utility
//! collection: the normalization pipeline everything else builds on, case
//! conversions, masking, slugs, and assorted inspection helpers.
//!
//! Most functions here are pure `&str -> String` transformations. The few
//! that can fail on domain-invalid input return sentinels (`None`, `false`,
//! empty string) rather than errors; see the crate error module for the
//! policy split.

use std::collections::HashMap;
use std::io::Write;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

mod array;
mod flags;
mod table;

pub use array::StringArray;
pub use flags::{test_flag, test_flags, FlagOptions};
pub use table::{table, Row};

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("hardcoded pattern"));

static ANSI_ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("hardcoded pattern"));

static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("hardcoded pattern"));

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("hardcoded pattern")
});

/// Options for the [`normalize`] pipeline.
///
/// Each flag independently toggles one stage of the fixed pipeline; see
/// [`normalize`] for the stage order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// If true, also remove underscores, hyphens, and every other
    /// non-alphanumeric character.
    pub strict: bool,
    /// If true, casing is preserved (no lowercase fold at the end).
    pub preserve_case: bool,
    /// If true, ANSI CLI-coloring escape sequences are removed.
    pub strip_cli_colors: bool,
}

/// Normalizes a string so it is easier to work with.
///
/// Applies, in fixed order: Unicode canonical decomposition (NFD), removal
/// of combining marks (accent stripping), collapse of consecutive whitespace
/// to a single space, outer trim, optional strict character strip, optional
/// ANSI escape strip, and a lowercase fold unless `preserve_case` is set.
///
/// Strict mode keeps only ASCII alphanumerics, so underscores go too:
/// `"my_var"` becomes `"myvar"`.
///
/// # Arguments
///
/// * `input` - The string to normalize
/// * `options` - Pipeline flags, see [`NormalizeOptions`]
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::{normalize, NormalizeOptions};
///
/// let query = "   mY  sEaRcH      qUÉry_1  ";
/// assert_eq!(normalize(query, &NormalizeOptions::default()), "my search query_1");
/// assert_eq!(
///     normalize(query, &NormalizeOptions { strict: true, ..Default::default() }),
///     "mysearchquery1"
/// );
/// ```
pub fn normalize(input: &str, options: &NormalizeOptions) -> String {
    let decomposed: String = input.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let collapsed = WHITESPACE_RE.replace_all(&decomposed, " ");
    let trimmed = collapsed.trim();

    let stripped: String = if options.strict {
        trimmed.chars().filter(char::is_ascii_alphanumeric).collect()
    } else {
        trimmed.to_string()
    };

    let decolored = if options.strip_cli_colors {
        strip_cli_colors(&stripped)
    } else {
        stripped
    };

    if options.preserve_case {
        decolored
    } else {
        decolored.to_lowercase()
    }
}

/// Checks whether a string carries any content once normalized.
///
/// A string is valid iff its default-normalized form is non-empty, so `""`
/// and `"    "` are both invalid. The "is it a string at all" half of the
/// original contract is the type system's job here.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::validate;
///
/// assert!(validate("valid"));
/// assert!(!validate(""));
/// assert!(!validate("     "));
/// ```
pub fn validate(input: &str) -> bool {
    !normalize(input, &NormalizeOptions::default()).is_empty()
}

/// Validates a string against a fixed set of allowed values.
///
/// Returns true iff the string is [`validate`]-valid and exactly equal to
/// one of the entries in `against`.
pub fn validate_against(input: &str, against: &[&str]) -> bool {
    validate(input) && against.contains(&input)
}

/// Capitalizes the first letter of the string.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::to_upper_case_first;
///
/// assert_eq!(to_upper_case_first("javaScript"), "JavaScript");
/// ```
pub fn to_upper_case_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first letter of the string.
pub fn to_lower_case_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalizes the first letter of each word in the string.
///
/// A "word" starts at the beginning of the string or after any
/// non-alphanumeric character.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::capitalize_words;
///
/// assert_eq!(capitalize_words("javaScript is cool"), "JavaScript Is Cool");
/// ```
pub fn capitalize_words(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_boundary = true;
    for c in input.chars() {
        if at_boundary && c.is_alphanumeric() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_boundary = !c.is_alphanumeric();
    }
    result
}

/// Small connector words that [`to_title_case`] leaves lowercase.
const SMALL_WORDS: [&str; 9] = ["and", "or", "but", "the", "in", "on", "of", "for", "with"];

/// Capitalizes each word except small connectors like "the" or "and".
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::to_title_case;
///
/// assert_eq!(
///     to_title_case("javaScript or typeScript, who's the best?"),
///     "JavaScript or TypeScript, Who's the Best?"
/// );
/// ```
pub fn to_title_case(input: &str) -> String {
    input
        .split(' ')
        .enumerate()
        .map(|(index, word)| {
            if index != 0 && SMALL_WORDS.contains(&word.to_lowercase().as_str()) {
                word.to_lowercase()
            } else {
                to_upper_case_first(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reverses the characters of a string.
pub fn reverse_string(input: &str) -> String {
    input.chars().rev().collect()
}

/// Removes all whitespace from the string.
pub fn remove_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Removes all ASCII vowels (either case) from a string.
pub fn remove_vowels(input: &str) -> String {
    input.chars().filter(|c| !is_vowel(*c)).collect()
}

/// Removes everything that is not an ASCII vowel from a string.
pub fn remove_consonants(input: &str) -> String {
    input.chars().filter(|c| is_vowel(*c)).collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Truncates a string to `length` characters and appends `"..."` if needed.
///
/// With `smart_truncate` set, the cut backs up to the last word boundary at
/// or before `length`, leaving a clean string instead of a mid-word cut.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::truncate;
///
/// assert_eq!(truncate("Hello, world!", 8, false), "Hello, w...");
/// assert_eq!(truncate("Hello, world!", 8, true), "Hello,...");
/// ```
pub fn truncate(input: &str, length: usize, smart_truncate: bool) -> String {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= length {
        return input.to_string();
    }

    let cut = if smart_truncate {
        // back up to the last space at or before the cut point
        let upto = length.min(chars.len() - 1);
        match (0..=upto).rev().find(|i| chars[*i] == ' ') {
            Some(space) => space,
            None => length,
        }
    } else {
        length
    };

    let mut result: String = chars[..cut].iter().collect();
    result.push_str("...");
    result
}

/// Same as [`truncate`], but cuts to a number of words instead of characters.
pub fn truncate_words(input: &str, words: usize) -> String {
    if input.chars().count() <= words {
        return input.to_string();
    }
    let mut result = input
        .split(' ')
        .take(words)
        .collect::<Vec<_>>()
        .join(" ");
    result.push_str("...");
    result
}

/// Returns the last character of a string, if any.
pub fn last_char(input: &str) -> Option<char> {
    input.chars().last()
}

/// Removes all ANSI CLI-coloring escape sequences from a string.
///
/// Useful when comparing a CLI-formatted string against a plain one, where
/// invisible control sequences would otherwise make equal-looking strings
/// compare unequal.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::strip_cli_colors;
///
/// assert_eq!(strip_cli_colors("\x1b[31mRed text\x1b[0m"), "Red text");
/// ```
pub fn strip_cli_colors(input: &str) -> String {
    ANSI_ESCAPE_RE.replace_all(input, "").into_owned()
}

/// Alphabetically sorts a set of strings by their normalized form,
/// returning a new, sorted vector.
pub fn sort_alphabetically(items: &[&str]) -> Vec<String> {
    let mut sorted: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    sorted.sort_by_key(|s| normalize(s, &NormalizeOptions::default()));
    sorted
}

/// Prepends and/or appends whitespace to a string.
pub fn space_string(input: &str, space_before: usize, space_after: usize) -> String {
    format!("{}{}{}", " ".repeat(space_before), input, " ".repeat(space_after))
}

/// Returns true if the string reads the same forwards and backwards.
///
/// With `strict` set, the string is strictly normalized first, so
/// punctuation and casing cannot stop a sentence from being a palindrome.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::is_palindrome;
///
/// assert!(is_palindrome("Hannah", false));
/// assert!(!is_palindrome("Do geese see God?", false));
/// assert!(is_palindrome("Do geese see God?", true));
/// ```
pub fn is_palindrome(input: &str, strict: bool) -> bool {
    let normalized = normalize(
        input,
        &NormalizeOptions {
            strict,
            ..Default::default()
        },
    );
    normalized == reverse_string(&normalized)
}

/// Returns true if `a` equals `b` reversed, after normalizing both.
pub fn is_anagram(a: &str, b: &str) -> bool {
    let options = NormalizeOptions::default();
    normalize(a, &options) == reverse_string(&normalize(b, &options))
}

/// How aggressively [`normalize_array`] should clean each entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrayNormalization {
    /// Full default normalization (accents stripped, lowercased).
    #[default]
    Standard,
    /// Trim only, preserving accents and casing.
    Soft,
    /// Trim and lowercase, preserving accents.
    Softer,
    /// Strict normalization with ANSI escapes removed as well.
    Strict,
}

/// Normalizes every string in a slice and drops the invalid ones.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::{normalize_array, ArrayNormalization};
///
/// let input = ["    hIi ", "", " yés! ", ""];
/// assert_eq!(
///     normalize_array(&input, ArrayNormalization::Standard),
///     vec!["hii", "yes!"]
/// );
/// ```
pub fn normalize_array(items: &[&str], mode: ArrayNormalization) -> Vec<String> {
    items
        .iter()
        .filter(|s| validate(s))
        .map(|s| match mode {
            ArrayNormalization::Standard => normalize(s, &NormalizeOptions::default()),
            ArrayNormalization::Soft => s.trim().to_string(),
            ArrayNormalization::Softer => s.trim().to_lowercase(),
            ArrayNormalization::Strict => normalize(
                s,
                &NormalizeOptions {
                    strict: true,
                    strip_cli_colors: true,
                    ..Default::default()
                },
            ),
        })
        .collect()
}

/// Splits a string on a separator, trimming each piece and stripping double
/// quotes.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::kominator;
///
/// assert_eq!(kominator("alpha,bravo,charlie", ","), vec!["alpha", "bravo", "charlie"]);
/// assert_eq!(kominator("alpha#bravo#charlie", "#"), vec!["alpha", "bravo", "charlie"]);
/// ```
pub fn kominator(input: &str, separator: &str) -> Vec<String> {
    input
        .split(separator)
        .map(|s| s.replace('"', "").trim().to_string())
        .collect()
}

/// "Reveals" a string by printing it to stdout character by character,
/// suspending `delay_ms` milliseconds between characters.
///
/// Fully sequential and not cancellable: once started it runs to
/// completion, then emits a trailing newline.
pub async fn reveal(input: &str, delay_ms: u64) -> Result<()> {
    let mut stdout = std::io::stdout();
    for c in input.chars() {
        tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
        write!(stdout, "{c}")?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}

/// Counts the occurrences of a substring within a string.
pub fn count_occurrences(input: &str, search: &str) -> usize {
    if search.is_empty() {
        return 0;
    }
    input.matches(search).count()
}

/// Counts the words in a string, after normalizing whitespace.
pub fn count_words(input: &str) -> usize {
    normalize(input, &NormalizeOptions::default())
        .split_whitespace()
        .count()
}

/// Returns the chunk after the last dot of a filename-ish string.
///
/// Mirrors the original's quirk: a dotless name yields the whole name, and
/// only an invalid (empty/whitespace) string yields `None`.
pub fn file_extension(input: &str) -> Option<String> {
    if !validate(input) {
        return None;
    }
    input.rsplit('.').next().map(|s| s.trim().to_string())
}

/// Makes the string plural if `count` is greater than one.
///
/// English only and intentionally not 100% accurate; covers the `-y`,
/// `-f`/`-fe`, and default `-s` families.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::plural_or_not;
///
/// assert_eq!(plural_or_not("leaf", 2), "leaves");
/// assert_eq!(plural_or_not("leaf", 1), "leaf");
/// assert_eq!(plural_or_not("felony", 3), "felonies");
/// ```
pub fn plural_or_not(input: &str, count: i64) -> String {
    if count == 1 {
        return input.to_string();
    }

    let trimmed = input.trim();
    let chars: Vec<char> = trimmed.chars().collect();

    if trimmed.ends_with('y') && chars.len() >= 2 && !is_vowel(chars[chars.len() - 2]) {
        return format!("{}ies", &trimmed[..trimmed.len() - 1]); // felony -> felonies
    }
    if trimmed.ends_with("fe") {
        return format!("{}ves", &trimmed[..trimmed.len() - 2]); // knife -> knives
    }
    if trimmed.ends_with('f') {
        return format!("{}ves", &trimmed[..trimmed.len() - 1]); // leaf -> leaves
    }

    format!("{trimmed}s") // constant -> constants
}

/// Checks if all characters of a string are uppercase (or caseless).
pub fn is_upper_case(input: &str) -> bool {
    input.to_uppercase() == input
}

/// Checks if all characters of a string are lowercase (or caseless).
pub fn is_lower_case(input: &str) -> bool {
    input.to_lowercase() == input
}

/// Splits a `snake_case` string into its words.
pub fn split_snake_case(input: &str) -> Vec<String> {
    input.trim().split('_').map(str::to_string).collect()
}

/// Splits a `kebab-case` string into its words.
pub fn split_kebab_case(input: &str) -> Vec<String> {
    input.trim().split('-').map(str::to_string).collect()
}

/// Splits a `camelCase` or `PascalCase` string into lowercase words.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::split_camel_case;
///
/// assert_eq!(split_camel_case("someVariableLol"), vec!["some", "variable", "lol"]);
/// ```
pub fn split_camel_case(input: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in input.chars() {
        if c.is_uppercase() && !current.is_empty() {
            words.push(current.to_lowercase());
            current = String::new();
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current.to_lowercase());
    }
    words
        .iter()
        .flat_map(|w| w.split_whitespace())
        .filter(|w| validate(w))
        .map(str::to_string)
        .collect()
}

/// Turns a string into a URL-friendly slug.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::slugify;
///
/// assert_eq!(slugify("My Homepage!"), "my-homepage");
/// ```
pub fn slugify(input: &str) -> String {
    normalize(
        input,
        &NormalizeOptions {
            strip_cli_colors: true,
            ..Default::default()
        },
    )
    .chars()
    .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
    .collect::<String>()
    .replace(' ', "-")
}

/// Options for [`mask`] and [`mask_email`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskOptions {
    /// Character to be used as a mask.
    pub mask_char: char,
    /// Amount of final characters that remain visible.
    pub visible_chars: usize,
}

impl Default for MaskOptions {
    fn default() -> Self {
        MaskOptions {
            mask_char: '*',
            visible_chars: 2,
        }
    }
}

/// Masks a string, leaving only its last characters visible.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::{mask, MaskOptions};
///
/// assert_eq!(mask("secret!!", &MaskOptions::default()), "******!!");
/// ```
pub fn mask(input: &str, options: &MaskOptions) -> String {
    let total = input.chars().count();
    if options.visible_chars >= total {
        return input.to_string();
    }
    let hidden = total - options.visible_chars;
    let visible: String = input.chars().skip(hidden).collect();
    format!("{}{}", options.mask_char.to_string().repeat(hidden), visible)
}

/// Masks the user part of an email address using [`mask`].
///
/// Invalid email addresses are returned untouched.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::{mask_email, MaskOptions};
///
/// let opts = MaskOptions { mask_char: '#', visible_chars: 1 };
/// assert_eq!(mask_email("zaka@somewhere.com", &opts), "###a@somewhere.com");
/// ```
pub fn mask_email(input: &str, options: &MaskOptions) -> String {
    if !is_valid_email(input) {
        return input.to_string();
    }
    match input.split_once('@') {
        Some((user, domain)) => format!("{}@{}", mask(user, options), domain),
        None => input.to_string(),
    }
}

/// Converts a string to `snake_case`.
pub fn to_snake_case(input: &str) -> String {
    normalize(input, &NormalizeOptions::default()).replace(' ', "_")
}

/// Converts a string to `kebab-case`.
pub fn to_kebab_case(input: &str) -> String {
    normalize(input, &NormalizeOptions::default()).replace(' ', "-")
}

fn ascii_words(input: &str) -> Vec<String> {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Converts a string to `camelCase`.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::to_camel_case;
///
/// assert_eq!(to_camel_case("my variable"), "myVariable");
/// ```
pub fn to_camel_case(input: &str) -> String {
    ascii_words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                to_upper_case_first(word)
            }
        })
        .collect()
}

/// Converts a string to `PascalCase`.
pub fn to_pascal_case(input: &str) -> String {
    ascii_words(input)
        .iter()
        .map(|word| to_upper_case_first(word))
        .collect()
}

/// Converts a string to `L33T 5P34K`.
pub fn to_leet_speak(input: &str) -> String {
    input
        .to_uppercase()
        .chars()
        .map(|c| match c {
            'A' => '4',
            'E' => '3',
            'L' => '1',
            'O' => '0',
            'U' => 'V',
            'S' => '5',
            'T' => '7',
            other => other,
        })
        .collect()
}

/// Converts a string to `nErD CaSe` (every odd character uppercased).
pub fn to_nerd_case(input: &str) -> String {
    input
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_string()
            } else {
                c.to_uppercase().to_string()
            }
        })
        .collect()
}

/// Extracts every run of digits from a string as numbers.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::extract_numbers;
///
/// assert_eq!(extract_numbers("2 number 9, a number 45"), vec![2, 9, 45]);
/// ```
pub fn extract_numbers(input: &str) -> Vec<u64> {
    DIGITS_RE
        .find_iter(input)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Validates if a string is a plausible email address.
///
/// Checks for a non-empty user part, a dotted domain, and that the address
/// survives normalization unchanged (so accented addresses are rejected).
pub fn is_valid_email(input: &str) -> bool {
    if !validate(input) {
        return false;
    }
    let Some((user, domain)) = input.split_once('@') else {
        return false;
    };
    if user.is_empty() || domain.split('.').count() < 2 {
        return false;
    }
    normalize(input, &NormalizeOptions::default()) == input.trim().to_lowercase()
}

/// Validates if a string is a HEX color code (`#` plus 3, 4, 6, or 8 digits).
pub fn is_valid_hex_color(input: &str) -> bool {
    HEX_COLOR_RE.is_match(input)
}

/// Escapes HTML special characters into ampersand entities.
pub fn clean_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('/', "&#47;")
}

/// Restores HTML special characters from ampersand entities.
pub fn fmt_html(input: &str) -> String {
    input
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#47;", "/")
}

/// Gets the longest string of a slice. Among equals, the last one wins.
pub fn longest(items: &[&str]) -> String {
    items
        .iter()
        .max_by_key(|s| s.chars().count())
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Gets the longest space-separated word of a string.
pub fn longest_word(input: &str) -> String {
    if !validate(input) {
        return String::new();
    }
    let words: Vec<&str> = input.split(' ').collect();
    longest(&words)
}

const RANDOM_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a string of random alphanumeric characters.
pub fn random_string(length: usize) -> String {
    let chars: Vec<char> = RANDOM_ALPHABET.chars().collect();
    let mut rng = rand::thread_rng();
    (0..length).map(|_| chars[rng.gen_range(0..chars.len())]).collect()
}

/// Gets the first `n` space-separated words of a string.
pub fn first_words(input: &str, n: usize) -> String {
    input.split(' ').take(n).collect::<Vec<_>>().join(" ")
}

/// Replaces all occurrences of each search string with its replacement.
///
/// Pairs are applied in order, each search key trimmed first.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::replace_all_pairs;
///
/// assert_eq!(
///     replace_all_pairs("hi! my name is [[name]]", &[("[[name]]", "Zaka")]),
///     "hi! my name is Zaka"
/// );
/// ```
pub fn replace_all_pairs(input: &str, replacements: &[(&str, &str)]) -> String {
    let mut working = input.to_string();
    for (search, replacement) in replacements {
        working = working.replace(search.trim(), replacement);
    }
    working
}

/// Escapes C0 control characters (and DEL) as `\uXXXX` sequences.
pub fn escape_js(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if (c as u32) < 0x20 || c as u32 == 0x7F {
                format!("\\u{:04X}", c as u32)
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Returns the characters of a string in the `[from, to)` index range.
pub fn chunk(input: &str, from: usize, to: usize) -> String {
    if to <= from {
        return String::new();
    }
    input.chars().skip(from).take(to - from).collect()
}

/// Splits a string into chunks of at most `size` characters.
///
/// A zero chunk size yields the whole string as a single chunk.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::chunks;
///
/// assert_eq!(chunks("abcdef", 3), vec!["abc", "def"]);
/// assert_eq!(chunks("abcdef", 5), vec!["abcde", "f"]);
/// ```
pub fn chunks(input: &str, size: usize) -> Vec<String> {
    if size == 0 {
        return vec![input.to_string()];
    }
    input
        .chars()
        .collect::<Vec<_>>()
        .chunks(size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Ratio of positionally matching characters between two strings, over the
/// length of the longer one. `1.0` means equal, `0.0` means nothing matches.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let longest = a_chars.len().max(b_chars.len());
    if longest == 0 {
        return 1.0;
    }
    let matching = a_chars
        .iter()
        .zip(b_chars.iter())
        .filter(|(x, y)| x == y)
        .count();
    matching as f64 / longest as f64
}

/// Counts how many times each character appears in a string.
pub fn count_chars(input: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in input.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}
