//! Filename shapes used to group numbered files.
//!
//! A shape is the filename with every run of ASCII digits collapsed into a
//! single [`PLACEHOLDER`]. Files that share a shape within one directory are
//! rendered as one collapsed line.

/// Character that stands in for a run of digits.
pub const PLACEHOLDER: char = '#';

/// Compute the shape of a filename.
///
/// Each maximal run of ASCII digits becomes exactly one [`PLACEHOLDER`];
/// every other character is copied unchanged. A name without digits is
/// returned as-is.
///
/// ```
/// use dmitree::pattern::extract_pattern;
///
/// assert_eq!(extract_pattern("img_10.png"), "img_#.png");
/// assert_eq!(extract_pattern("v2.0.13-rc1.tar"), "v#.#.#-rc#.tar");
/// assert_eq!(extract_pattern("readme.txt"), "readme.txt");
/// ```
pub fn extract_pattern(name: &str) -> String {
    let mut shape = String::with_capacity(name.len());
    let mut in_number = false;

    for c in name.chars() {
        if c.is_ascii_digit() {
            if !in_number {
                shape.push(PLACEHOLDER);
                in_number = true;
            }
        } else {
            shape.push(c);
            in_number = false;
        }
    }

    shape
}

/// Whether a filename contains at least one ASCII digit.
///
/// Only such names take part in grouping.
pub fn has_numbers(name: &str) -> bool {
    name.bytes().any(|b| b.is_ascii_digit())
}
