//! ANSI colour for the filled bar markers.

use std::str;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit in `{0}`")]
    InvalidHexDigit(String),
    #[error("colour `{0}` is neither a known name nor 6 hex digits")]
    Unknown(String),
}

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    pub const RESET: Self = Self::Static("\x1b[0m");

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            // at most 7 + 3 * 3 + 2 + 1 = 19 bytes
            len: u8::try_from(len).unwrap_or(u8::MAX),
        }
    }

    /// Parse colour names or `#rrggbb`.  Falls back to hex parser on miss.
    ///
    /// # Errors
    /// [`ColorError`] when `s` is neither a palette name nor a hex triplet.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::Static("\x1b[30m")),
            "red" => Ok(Self::Static("\x1b[31m")),
            "green" => Ok(Self::Static("\x1b[32m")),
            "yellow" => Ok(Self::Static("\x1b[33m")),
            "blue" => Ok(Self::Static("\x1b[34m")),
            "magenta" => Ok(Self::Static("\x1b[35m")),
            "cyan" => Ok(Self::Static("\x1b[36m")),
            "white" => Ok(Self::Static("\x1b[37m")),
            "orange" | "industrial" => Ok(Self::Static("\x1b[38;2;210;135;10m")),
            _ => Self::from_hex(s),
        }
    }

    /// # Errors
    /// [`ColorError`] unless `hex` is exactly six hex digits after an optional `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::Unknown(hex.to_owned()));
        }
        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit(hex.to_owned()))
        };
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or_default(),
        }
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}
