//! Platform-aware accelerator label rendering.
//!
//! Combos are written with platform-neutral tokens joined by `+`
//! (e.g. `CommandOrControl+Shift+B`). Rendering substitutes each token
//! through a fixed table selected by the platform: symbol glyphs joined
//! with nothing on a Mac-like target (`⌘⇧B`), words joined with `+`
//! elsewhere (`Ctrl+Shift+B`).

/// Platform target for display formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOS
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(target_os = "linux")]
        {
            Platform::Linux
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            Platform::Linux
        }
    }

    /// Whether labels use the symbol glyph set.
    pub fn is_mac_like(self) -> bool {
        matches!(self, Platform::MacOS)
    }
}

/// Render a raw combo into its display label for `platform`.
pub(crate) fn render_label(combo: &str, platform: Platform) -> String {
    let joiner = if platform.is_mac_like() { "" } else { "+" };
    combo
        .split('+')
        .map(|token| render_token(token.trim(), platform))
        .collect::<Vec<_>>()
        .join(joiner)
}

/// Token table. Matching is case-insensitive; tokens outside the table are
/// plain keys and render uppercased.
fn render_token(token: &str, platform: Platform) -> String {
    let glyphs = platform.is_mac_like();
    let rendered = match token.to_ascii_lowercase().as_str() {
        "commandorcontrol" => {
            if glyphs {
                "⌘"
            } else {
                "Ctrl"
            }
        }
        "ctrl" => {
            if glyphs {
                "^"
            } else {
                "Ctrl"
            }
        }
        "shift" => {
            if glyphs {
                "⇧"
            } else {
                "Shift"
            }
        }
        "enter" => {
            if glyphs {
                "↵"
            } else {
                "Enter"
            }
        }
        "alt" => {
            if glyphs {
                "⌥"
            } else {
                "Alt"
            }
        }
        _ => return token.to_uppercase(),
    };
    rendered.to_string()
}
