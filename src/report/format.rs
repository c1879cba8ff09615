//! Shared console layout helpers.

/// Width of section banners.
pub const BANNER_WIDTH: usize = 60;
/// Width of the rule around truth table titles.
pub const TABLE_WIDTH: usize = 40;

pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// A blank line, then `title` between two rules.
pub fn banner(title: &str) -> String {
    format!("\n{rule}\n{title}\n{rule}\n", rule = rule(BANNER_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_layout() {
        let text = banner("Hi");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1].len(), BANNER_WIDTH);
        assert_eq!(lines[2], "Hi");
        assert!(text.ends_with("=\n"));
    }
}
