use std::fmt;

/// Errors raised by the UTF-8 layer, on either the encode or decode path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Error {
    /// A codepoint above U+10FFFF, or one that cannot be represented in the
    /// requested output (a surrogate value headed for a Rust `String`).
    InvalidCodepoint(u32),
    /// A byte that cannot appear at this point of a UTF-8 sequence: a
    /// continuation byte where a leading byte was expected, a leading byte
    /// announcing five or more bytes, or an ASCII byte inside a sequence.
    InvalidSequence { byte: u8 },
}

impl fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            Utf8Error::InvalidCodepoint(codepoint) => {
                write_error(f, use_color, &format!("unrecognized Unicode codepoint: {:x}", codepoint))
            }
            Utf8Error::InvalidSequence { byte } => {
                write_error(f, use_color, "invalid UTF-8 sequence")?;
                writeln!(f)?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    &format!("unexpected byte {:#04x}; the value was probably truncated or tampered with", byte),
                )
            }
        }
    }
}

impl std::error::Error for Utf8Error {}

/// Errors that can occur while decoding a Base64-URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character that is neither an alphabet symbol nor
    /// ignorable whitespace/padding.
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
    },
    /// A UTF-16 input unit that is an unpaired surrogate, so it has no
    /// `char` to report.
    InvalidCodeUnit {
        unit: u16,
        position: usize,
        input: String,
    },
    /// The decoded bytes do not form valid UTF-8.
    Utf8(Utf8Error),
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str) -> Self {
        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: truncate_input(input),
        }
    }

    /// Create an InvalidCodeUnit error with context
    pub fn invalid_code_unit(unit: u16, position: usize, input: &str) -> Self {
        DecodeError::InvalidCodeUnit {
            unit,
            position,
            input: truncate_input(input),
        }
    }
}

fn truncate_input(input: &str) -> String {
    if input.chars().count() > 60 {
        format!("{}...", input.chars().take(60).collect::<String>())
    } else {
        input.to_string()
    }
}

impl From<Utf8Error> for DecodeError {
    fn from(err: Utf8Error) -> Self {
        DecodeError::Utf8(err)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
            } => {
                write_error(
                    f,
                    use_color,
                    &format!("invalid Base64-URL character {:?} at position {}", c, position),
                )?;
                write_context(f, use_color, input, *position)
            }
            DecodeError::InvalidCodeUnit {
                unit,
                position,
                input,
            } => {
                write_error(
                    f,
                    use_color,
                    &format!("unpaired surrogate {:#06x} at position {}", unit, position),
                )?;
                write_context(f, use_color, input, *position)
            }
            DecodeError::Utf8(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Utf8(err) => Some(err),
            DecodeError::InvalidCharacter { .. } | DecodeError::InvalidCodeUnit { .. } => None,
        }
    }
}

/// Shows the input with a caret under `position`, then the accepted alphabet.
fn write_context(
    f: &mut fmt::Formatter<'_>,
    use_color: bool,
    input: &str,
    position: usize,
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f)?;

    // Caret only lines up when the position falls inside the shown input
    if position < 60 {
        writeln!(f, "  {}", input)?;
        write!(f, "  {}", " ".repeat(position))?;
        if use_color {
            writeln!(f, "\x1b[1;31m^\x1b[0m")?;
        } else {
            writeln!(f, "^")?;
        }
        writeln!(f)?;
    }

    write_hint(
        f,
        use_color,
        &format!("valid characters: {}", crate::core::alphabet::VALID_CHARS),
    )
}

fn write_error(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        write!(f, "hint: {}", message)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
