use crate::types::{SemanticColor, Shell};

const RESET: &str = "\x1b[0m";

/// Turns semantic colors into escape sequences for one shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    shell: Shell,
    color: bool,
}

impl Painter {
    pub fn new(shell: Shell, color: bool) -> Self {
        Painter { shell, color }
    }

    /// A painter that emits text only
    pub fn plain() -> Self {
        Painter::new(Shell::Plain, false)
    }

    /// Reset, color, text, reset; escapes wrapped in zero-width markers
    pub fn paint(&self, text: &str, fg: SemanticColor, bg: Option<SemanticColor>) -> String {
        let text = self.shell.escape_text(text);
        if !self.color {
            return text;
        }

        let mut codes = fg.to_color().to_fg_str().into_owned();
        if let Some(bg) = bg {
            codes.push(';');
            codes.push_str(&bg.to_color().to_bg_str());
        }

        let reset = self.shell.zero_width(RESET);
        format!(
            "{reset}{start}{text}{reset}",
            start = self.shell.zero_width(&format!("\x1b[{}m", codes)),
        )
    }
}

/// Drop escape sequences and `shell`'s markers, leaving the visible text
pub fn strip_escapes(rendered: &str, shell: Shell) -> String {
    let mut out = String::with_capacity(rendered.len());
    let mut chars = rendered.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, shell) {
            ('\x1b', _) => {
                // CSI sequence: ESC [ params final-byte
                if chars.peek() == Some(&'[') {
                    chars.next();
                    for c in chars.by_ref() {
                        if ('@'..='~').contains(&c) {
                            break;
                        }
                    }
                }
            }
            ('\x01' | '\x02', Shell::Bash) => {}
            ('%', Shell::Zsh) => match chars.peek() {
                Some('{') | Some('}') => {
                    chars.next();
                }
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                _ => out.push('%'),
            },
            _ => out.push(c),
        }
    }

    out
}
