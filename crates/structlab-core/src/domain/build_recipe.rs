//! Build recipe for C projects.
//!
//! The recipe body lives in `templates/c/Makefile` and is embedded at compile
//! time, so every invocation writes byte-identical content. Source globbing
//! and output paths are evaluated later by `make`, never by structlab.

/// File name the recipe is written to, relative to the project root.
pub const FILE_NAME: &str = "Makefile";

const MAKEFILE: &str = include_str!("../../templates/c/Makefile");

/// The static build recipe body.
pub fn content() -> &'static str {
    MAKEFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_is_not_empty() {
        assert!(!content().trim().is_empty());
    }

    #[test]
    fn recipe_declares_standard_targets() {
        let recipe = content();
        assert!(recipe.contains("CC = gcc"));
        assert!(recipe.contains("CFLAGS = -Wall -Iinclude"));
        assert!(recipe.contains("\ntest: $(TARGET)\n"));
        assert!(recipe.contains("\nclean:\n"));
        assert!(recipe.contains(".PHONY: all test clean"));
    }

    #[test]
    fn recipe_lines_are_tab_indented() {
        // make rejects space-indented recipe lines
        for line in content().lines() {
            assert!(!line.starts_with(' '), "space-indented line: {line:?}");
        }
        assert!(content().contains("\n\t$(CC) $(CFLAGS) -c $< -o $@\n"));
    }

    #[test]
    fn recipe_ends_with_newline() {
        assert!(content().ends_with('\n'));
    }
}
