use regex::{Captures, Regex};
use std::borrow::Cow;

use crate::constants::RELATIVE_PREFIX;
use crate::error::Result;

/// A single textual rewrite: a pattern to look for plus the transform
/// applied to every match.
///
/// Rules never see the filesystem; they map old content to new content.
/// Returning [`Cow::Borrowed`] means the rule matched nothing.
pub trait RewriteRule {
    /// Short name used in log records.
    fn name(&self) -> &str;

    /// Rewrites every specifier this rule recognises so it ends in `extension`.
    fn apply<'a>(&self, content: &'a str, extension: &str) -> Cow<'a, str>;
}

/// Appends an extension to `./`-relative specifiers found by a regex.
///
/// The pattern must define three named groups: `head` (everything before the
/// specifier, including the opening quote), `spec` (the specifier itself) and
/// `tail` (the closing quote and any trailing punctuation). Text outside those
/// groups is kept byte for byte.
#[derive(Debug, Clone)]
pub struct SpecifierRule {
    name: &'static str,
    pattern: Regex,
}

impl SpecifierRule {
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        Ok(Self { name, pattern: Regex::new(pattern)? })
    }

    /// `from './x'` and `from "./x"`, which covers both `import ... from` and
    /// `export ... from`. A specifier never spans a line break.
    pub fn import_from() -> Result<Self> {
        let prefix = regex::escape(RELATIVE_PREFIX);
        Self::new(
            "import-from",
            &format!(r#"(?P<head>from\s+['"])(?P<spec>{prefix}[^'";\n]+)(?P<tail>['"])"#),
        )
    }

    /// `require('./x')` and `require("./x")`.
    pub fn require_call() -> Result<Self> {
        let prefix = regex::escape(RELATIVE_PREFIX);
        Self::new(
            "require-call",
            &format!(r#"(?P<head>require\(['"])(?P<spec>{prefix}[^'"\n]+)(?P<tail>['"]\))"#),
        )
    }
}

impl RewriteRule for SpecifierRule {
    fn name(&self) -> &str {
        self.name
    }

    fn apply<'a>(&self, content: &'a str, extension: &str) -> Cow<'a, str> {
        self.pattern.replace_all(content, |caps: &Captures| {
            let spec = &caps["spec"];
            if spec.ends_with(extension) {
                caps[0].to_string()
            } else {
                format!("{}{spec}{extension}{}", &caps["head"], &caps["tail"])
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(content: &str) -> String {
        SpecifierRule::import_from().unwrap().apply(content, ".js").into_owned()
    }

    fn require(content: &str) -> String {
        SpecifierRule::require_call().unwrap().apply(content, ".js").into_owned()
    }

    #[test]
    fn import_form_appends_extension() {
        assert_eq!(import("import x from './util';"), "import x from './util.js';");
        assert_eq!(import(r#"import x from "./util";"#), r#"import x from "./util.js";"#);
        assert_eq!(import("export * from './types';"), "export * from './types.js';");
        assert_eq!(
            import("import { a, b } from  './nested/mod'"),
            "import { a, b } from  './nested/mod.js'"
        );
    }

    #[test]
    fn import_form_spans_multiline_braces() {
        let source = "import {\n  a,\n  b,\n} from './ab';\n";
        assert_eq!(import(source), "import {\n  a,\n  b,\n} from './ab.js';\n");
    }

    #[test]
    fn require_form_appends_extension() {
        assert_eq!(require("const y = require('./helpers');"), "const y = require('./helpers.js');");
        assert_eq!(require(r#"require("./a/b")"#), r#"require("./a/b.js")"#);
    }

    #[test]
    fn require_form_needs_closing_paren() {
        assert_eq!(require("require('./a' + suffix)"), "require('./a' + suffix)");
    }

    #[test]
    fn leaves_non_dot_slash_specifiers_alone() {
        for source in [
            "import x from '../util';",
            "import x from 'lodash';",
            "import x from '/abs/path';",
            "import x from '@scope/pkg';",
        ] {
            assert_eq!(import(source), source);
        }
        for source in ["require('../util')", "require('fs')", "require('/abs')"] {
            assert_eq!(require(source), source);
        }
    }

    #[test]
    fn already_suffixed_specifiers_are_untouched() {
        let source = "import x from './util.js';";
        assert!(matches!(
            SpecifierRule::import_from().unwrap().apply(source, ".js"),
            Cow::Owned(ref s) if s == source
        ));
        assert_eq!(require("require('./util.js')"), "require('./util.js')");
    }

    #[test]
    fn unterminated_quotes_do_not_match() {
        let source = "import x from './util";
        assert!(matches!(
            SpecifierRule::import_from().unwrap().apply(source, ".js"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn unterminated_import_does_not_reach_the_next_line() {
        let rewriter = SpecifierRule::import_from().unwrap();
        for source in [
            "import x from './util\nconst s = 'b';\n",
            "// adapted from './docs\nconst s = foo('a');\n",
            "export * from \"./a\nconst t = \"b\";\n",
        ] {
            assert!(matches!(rewriter.apply(source, ".js"), Cow::Borrowed(_)), "{source:?}");
        }
    }

    #[test]
    fn unterminated_require_does_not_reach_the_next_line() {
        let source = "require('./a\nconst s = 'b')";
        assert!(matches!(
            SpecifierRule::require_call().unwrap().apply(source, ".js"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn custom_extension_is_used() {
        let rule = SpecifierRule::import_from().unwrap();
        assert_eq!(rule.apply("export * from './a';", ".mjs"), "export * from './a.mjs';");
        assert_eq!(rule.apply("export * from './a.mjs';", ".mjs"), "export * from './a.mjs';");
    }

    #[test]
    fn rule_names() {
        assert_eq!(SpecifierRule::import_from().unwrap().name(), "import-from");
        assert_eq!(SpecifierRule::require_call().unwrap().name(), "require-call");
    }
}
