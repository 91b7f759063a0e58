//! Open modes as a bit set.
//!
//! | Flags | Mode string |
//! |-------|-------------|
//! | `IN` | `r` |
//! | `OUT`, `OUT \| TRUNC` | `w` |
//! | `APP`, `OUT \| APP` | `a` |
//! | `OUT \| IN` | `r+` |
//! | `OUT \| IN \| TRUNC` | `w+` |
//! | `OUT \| IN \| APP`, `IN \| APP` | `a+` |
//!
//! Adding `BINARY` to any row appends `b` to the mode string. `ATE` may be
//! added to any valid combination and positions the file at its end after
//! opening. Every other combination is invalid.

use std::fmt;
use std::fs::OpenOptions;

bitflags::bitflags! {
    /// A combination of open flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenMode: u32 {
        const APP    = 1 << 0;
        const BINARY = 1 << 1;
        const IN     = 1 << 2;
        const OUT    = 1 << 3;
        const TRUNC  = 1 << 4;
        const ATE    = 1 << 5;
    }
}

/// Flag combination (without `BINARY`/`ATE`), text mode, binary mode.
const MODE_TABLE: &[(OpenMode, &str, &str)] = &[
    (OpenMode::IN, "r", "rb"),
    (OpenMode::OUT, "w", "wb"),
    (OpenMode::OUT.union(OpenMode::TRUNC), "w", "wb"),
    (OpenMode::APP, "a", "ab"),
    (OpenMode::OUT.union(OpenMode::APP), "a", "ab"),
    (OpenMode::OUT.union(OpenMode::IN), "r+", "r+b"),
    (OpenMode::OUT.union(OpenMode::IN).union(OpenMode::TRUNC), "w+", "w+b"),
    (OpenMode::OUT.union(OpenMode::IN).union(OpenMode::APP), "a+", "a+b"),
    (OpenMode::IN.union(OpenMode::APP), "a+", "a+b"),
];

impl OpenMode {
    /// Whether the file is positioned at its end after opening.
    pub const fn seeks_to_end(self) -> bool {
        self.contains(Self::ATE)
    }

    /// The C `fopen` mode string, or `None` for an invalid combination.
    pub fn to_mode_string(self) -> Option<&'static str> {
        let binary = self.contains(Self::BINARY);
        let flags = self.difference(Self::ATE | Self::BINARY);
        MODE_TABLE
            .iter()
            .find(|(row, _, _)| *row == flags)
            .map(|&(_, text, bin)| if binary { bin } else { text })
    }

    /// Equivalent `OpenOptions`, or `None` for an invalid combination.
    pub fn to_open_options(self) -> Option<OpenOptions> {
        let mut options = OpenOptions::new();
        match self.to_mode_string()?.trim_end_matches('b') {
            "r" => options.read(true),
            "w" => options.write(true).create(true).truncate(true),
            "a" => options.append(true).create(true),
            "r+" => options.read(true).write(true),
            "w+" => options.read(true).write(true).create(true).truncate(true),
            "a+" => options.read(true).append(true).create(true),
            _ => return None,
        };
        Some(options)
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_mode_string() {
            Some(mode) if self.seeks_to_end() => write!(f, "{mode} (at end)"),
            Some(mode) => f.write_str(mode),
            None => write!(f, "invalid({:#x})", self.bits()),
        }
    }
}
