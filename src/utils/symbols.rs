pub mod arrow {
    pub const UP: &str = "↑";
    pub const DOWN: &str = "↓";
}

pub mod triangle {
    pub const UP: &str = "▲";
    pub const DOWN: &str = "▼";
}

/// Gap between a header title and its sort indicator
pub const INDICATOR_GAP: &str = "\u{00A0}";
