//! Color rules and ANSI SGR code parsing

use std::collections::HashMap;
use std::path::Path;

use termcolor::{Color, ColorSpec};

/// Rule key that applies to directory headers.
pub const FOLDER_KEY: &str = "folder";

/// Colors keyed by file extension (`.c`) or [`FOLDER_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorRules {
    rules: HashMap<String, ColorSpec>,
}

impl ColorRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rule for `key`.
    ///
    /// Extension keys are matched case-insensitively and may omit the dot.
    pub fn insert(&mut self, key: &str, spec: ColorSpec) {
        self.rules.insert(normalize_key(key), spec);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Color for directory headers. Bold blue unless a `folder` rule overrides it.
    pub fn folder(&self) -> ColorSpec {
        self.rules.get(FOLDER_KEY).cloned().unwrap_or_else(|| {
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(Color::Blue)).set_bold(true);
            spec
        })
    }

    /// Color for a file name or shape, chosen by its extension.
    pub fn for_file(&self, name: &str) -> Option<&ColorSpec> {
        let ext = Path::new(name).extension()?.to_str()?;
        self.rules.get(&format!(".{}", ext.to_lowercase()))
    }
}

fn normalize_key(key: &str) -> String {
    let key = key.trim();
    if key == FOLDER_KEY || key.starts_with('.') {
        key.to_lowercase()
    } else {
        format!(".{}", key.to_lowercase())
    }
}

/// Parse an ANSI SGR parameter list such as `31`, `1;34` or `38;5;208`.
///
/// Returns `None` for empty input, non-numeric parameters, or codes that
/// have no terminal color equivalent.
pub fn parse_ansi_code(code: &str) -> Option<ColorSpec> {
    let params: Vec<u8> = code
        .split(';')
        .map(|p| p.trim().parse::<u8>().ok())
        .collect::<Option<_>>()?;

    let mut spec = ColorSpec::new();
    let mut params = params.into_iter();

    while let Some(p) = params.next() {
        match p {
            0 => spec.clear(),
            1 => {
                spec.set_bold(true);
            }
            2 => {
                spec.set_dimmed(true);
            }
            3 => {
                spec.set_italic(true);
            }
            4 => {
                spec.set_underline(true);
            }
            9 => {
                spec.set_strikethrough(true);
            }
            30..=37 => {
                spec.set_fg(Some(basic_color(p - 30)));
            }
            39 => {
                spec.set_fg(None);
            }
            40..=47 => {
                spec.set_bg(Some(basic_color(p - 40)));
            }
            49 => {
                spec.set_bg(None);
            }
            90..=97 => {
                spec.set_fg(Some(basic_color(p - 90))).set_intense(true);
            }
            100..=107 => {
                spec.set_bg(Some(basic_color(p - 100))).set_intense(true);
            }
            38 => {
                spec.set_fg(Some(extended_color(&mut params)?));
            }
            48 => {
                spec.set_bg(Some(extended_color(&mut params)?));
            }
            _ => return None,
        }
    }

    Some(spec)
}

fn basic_color(n: u8) -> Color {
    match n {
        0 => Color::Black,
        1 => Color::Red,
        2 => Color::Green,
        3 => Color::Yellow,
        4 => Color::Blue,
        5 => Color::Magenta,
        6 => Color::Cyan,
        _ => Color::White,
    }
}

/// `5;n` for the 256-color palette, `2;r;g;b` for truecolor.
fn extended_color(params: &mut impl Iterator<Item = u8>) -> Option<Color> {
    match params.next()? {
        5 => Some(Color::Ansi256(params.next()?)),
        2 => Some(Color::Rgb(params.next()?, params.next()?, params.next()?)),
        _ => None,
    }
}
