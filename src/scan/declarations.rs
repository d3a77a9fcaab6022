//! Declaration scanner: top-level prototypes in header-like files

use super::NameSource;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// `//` and `#`-style comments, stripped to end of line (this also removes
/// preprocessor directives wholesale)
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(//|#).*").unwrap());

/// Whitespace runs collapsed when a joined declaration is normalized
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// The `namespace` keyword as a standalone token
static NAMESPACE_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bnamespace\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At top level, looking for declarations
    Scanning,
    /// Inside a brace-delimited block (namespace scope, class body, inline
    /// definition); everything is ignored until a closing brace opens a
    /// line of its own
    InBlock,
    /// Collecting a signature that spans multiple lines
    Accumulating,
}

/// Scans header-like files for top-level function declarations.
///
/// A declaration starts on the first line containing an opening
/// parenthesis and ends at a `;` or `{` terminator; the joined lines form
/// one logical declaration whose trailing identifier is the function name.
/// Brace matching is a line heuristic: a block is left only when a closing
/// brace starts its own line, so nested namespaces and inline `}` are not
/// handled.
pub struct DeclarationScanner;

impl NameSource for DeclarationScanner {
    fn extract(&self, text: &str) -> Vec<String> {
        let mut state = State::Scanning;
        let mut pending = String::new();
        let mut names = Vec::new();

        for raw in text.lines() {
            let line = LINE_COMMENT.replace(raw, "");
            match state {
                State::InBlock => {
                    if line.trim_start().starts_with('}') {
                        state = State::Scanning;
                    }
                }
                State::Scanning => {
                    if NAMESPACE_KEYWORD.is_match(&line) {
                        // A one-line `namespace x { ... }` is dropped
                        // wholesale; only an unclosed brace enters the block
                        if opens_block(&line) {
                            state = State::InBlock;
                        }
                    } else if line.contains('(') {
                        pending.push_str(&line);
                        state = finish_or_accumulate(&line, &mut pending, &mut names);
                    } else if opens_block(&line) {
                        state = State::InBlock;
                    }
                }
                State::Accumulating => {
                    pending.push_str(&line);
                    state = finish_or_accumulate(&line, &mut pending, &mut names);
                }
            }
        }
        names
    }
}

/// True when a line opens a brace block it does not close
fn opens_block(line: &str) -> bool {
    line.contains('{') && !line.contains('}')
}

/// Decide whether the just-appended line terminates the pending
/// declaration; on `{` the following body is skipped as a block
fn finish_or_accumulate(line: &str, pending: &mut String, names: &mut Vec<String>) -> State {
    if !line.contains(';') && !line.contains('{') {
        return State::Accumulating;
    }
    let declaration = normalize(pending);
    pending.clear();
    match function_name(&declaration) {
        Some(name) => names.push(name),
        None => trace!("Dropping declaration with no name: {:?}", declaration),
    }
    if line.contains('{') {
        State::InBlock
    } else {
        State::Scanning
    }
}

/// Collapse whitespace runs to single spaces and trim
fn normalize(pending: &str) -> String {
    WHITESPACE_RUN.replace_all(pending, " ").trim().to_string()
}

/// The trailing identifier of a logical declaration: last whitespace-
/// delimited token before the first `(`, minus pointer/reference markers
fn function_name(declaration: &str) -> Option<String> {
    let prefix = match declaration.split_once('(') {
        Some((prefix, _)) => prefix,
        None => declaration,
    };
    let token = prefix.split_whitespace().last()?;
    let name: String = token.chars().filter(|c| !matches!(c, '*' | '&')).collect();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<String> {
        DeclarationScanner.extract(text)
    }

    #[test]
    fn test_single_line_declaration() {
        assert_eq!(scan("void open(const char* path, int flags);"), vec!["open"]);
    }

    #[test]
    fn test_multi_line_join() {
        let spread = "ssize_t\nread(int fd, void* buf,\n        size_t count);\n";
        let single = "ssize_t read(int fd, void* buf, size_t count);\n";
        assert_eq!(scan(spread), scan(single));
        assert_eq!(scan(spread), vec!["read"]);
    }

    #[test]
    fn test_three_line_parameter_list() {
        let text = "void execvpe(const char *file,\n        char *const *argv,\n        char *const *envp);\n";
        assert_eq!(scan(text), vec!["execvpe"]);
    }

    #[test]
    fn test_comment_only_line_yields_nothing() {
        assert!(scan("// foo(int)\n").is_empty());
        assert!(scan("# foo(int)\n").is_empty());
    }

    #[test]
    fn test_trailing_comment_stripped() {
        assert_eq!(scan("int dup(int oldfd); // see dup2(int, int)\n"), vec!["dup"]);
    }

    #[test]
    fn test_preprocessor_lines_ignored() {
        let text = "#if !defined(__MINGW32__)\nint fcntl(int fd, int cmd);\n#endif\n";
        assert_eq!(scan(text), vec!["fcntl"]);
    }

    #[test]
    fn test_one_line_namespace_excluded() {
        let text = "void open(const char* path, int flags);\nnamespace detail { int helper(int x); }\nssize_t\nread(int fd, void* buf, size_t count);\n";
        assert_eq!(scan(text), vec!["open", "read"]);
    }

    #[test]
    fn test_namespace_block_excluded() {
        let text = "namespace detail {\nint helper(int x);\n}\nint fsync(int fd);\n";
        assert_eq!(scan(text), vec!["fsync"]);
    }

    #[test]
    fn test_namespace_brace_on_next_line() {
        let text = "namespace detail\n{\nint helper(int x);\n}\nint fsync(int fd);\n";
        assert_eq!(scan(text), vec!["fsync"]);
    }

    #[test]
    fn test_pointer_decoration_stripped() {
        assert_eq!(scan("FILE *fdopen(int fd, const char *mode);"), vec!["fdopen"]);
        assert_eq!(
            scan("struct tm *gmtime_r(const time_t *timep, struct tm *result);"),
            vec!["gmtime_r"]
        );
    }

    #[test]
    fn test_class_body_skipped() {
        let text = "class failure {\n    int code() const;\n};\nint isatty(int fd);\n";
        assert_eq!(scan(text), vec!["isatty"]);
    }

    #[test]
    fn test_inline_definition_body_skipped() {
        let text = "int fileno(FILE *stream)\n{\n    call(stream);\n}\nint isatty(int fd);\n";
        assert_eq!(scan(text), vec!["fileno", "isatty"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_unterminated_declaration_dropped() {
        assert!(scan("int truncated(int fd,\n    const char *buf\n").is_empty());
    }

    #[test]
    fn test_paren_in_comment_does_not_accumulate() {
        let text = "// open(2) wrapper\nint fsync(int fd);\n";
        assert_eq!(scan(text), vec!["fsync"]);
    }
}
