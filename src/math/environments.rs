//! Structured LaTeX environments.

/// Known multi-row math environments.
pub struct MathEnvironments;

impl MathEnvironments {
    /// Matrix-like environments.
    pub const MATRIX_TYPES: &'static [&'static str] =
        &["matrix", "pmatrix", "bmatrix", "Bmatrix", "vmatrix", "Vmatrix"];

    /// Alignment environments.
    pub const ALIGNMENT_ENVS: &'static [&'static str] =
        &["align", "align*", "aligned", "cases", "split"];

    /// Iterate over every known environment name.
    pub fn all() -> impl Iterator<Item = &'static str> {
        Self::MATRIX_TYPES
            .iter()
            .chain(Self::ALIGNMENT_ENVS.iter())
            .copied()
    }

    /// Check whether content opens a structured environment.
    pub fn is_structured_env(content: &str) -> bool {
        Self::all().any(|env| content.contains(&format!("\\begin{{{}}}", env)))
    }
}

/// Clean up a raw multi-line math body.
///
/// Blank lines are dropped and the rest trimmed. Bodies mentioning a matrix,
/// alignment or cases environment keep their rows apart with `\\`; anything
/// else is joined with single spaces.
pub fn cleanup_math_content(content: &str) -> String {
    let lines: Vec<&str> = content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if ["matrix", "align", "cases"]
        .iter()
        .any(|env| content.contains(env))
    {
        lines.join(" \\\\ ")
    } else {
        lines.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_lists() {
        assert!(MathEnvironments::MATRIX_TYPES.contains(&"matrix"));
        assert!(MathEnvironments::MATRIX_TYPES.contains(&"bmatrix"));
        assert!(MathEnvironments::ALIGNMENT_ENVS.contains(&"align*"));
        assert!(MathEnvironments::ALIGNMENT_ENVS.contains(&"cases"));
        assert_eq!(MathEnvironments::all().count(), 11);
    }

    #[test]
    fn test_structured_env_detection() {
        for env in MathEnvironments::all() {
            let content = format!("\\begin{{{}}} content \\end{{{}}}", env, env);
            assert!(MathEnvironments::is_structured_env(&content), "{}", env);
        }
        assert!(!MathEnvironments::is_structured_env("x^2 + y^2"));
        assert!(!MathEnvironments::is_structured_env("\\begin{equation} x \\end{equation}"));
    }

    #[test]
    fn test_cleanup_plain_content() {
        assert_eq!(cleanup_math_content("  x = 1\n\n  + y  \n"), "x = 1 + y");
    }

    #[test]
    fn test_cleanup_structured_content() {
        let content = "\\begin{cases}\n  x \\\\\n  y\n\\end{cases}";
        assert_eq!(
            cleanup_math_content(content),
            "\\begin{cases} \\\\ x \\\\ \\\\ y \\\\ \\end{cases}"
        );
    }
}
