use std::borrow::Cow;
use std::path::Path;

use crate::error::Result;
use crate::ioutils::{read_text, write_text};

use super::rule::{RewriteRule, SpecifierRule};

/// What happened to a single candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The content changed. Persisted unless the rewriter runs dry.
    Updated,
    /// Nothing matched, or every match already carried the extension.
    Unchanged,
}

/// Applies an ordered set of [`RewriteRule`]s to candidate files.
///
/// Each file is handled on its own: read whole, transformed, and written back
/// whole only when the text actually changed. No state survives between files.
pub struct Rewriter {
    rules: Vec<Box<dyn RewriteRule>>,
    extension: String,
    dry_run: bool,
}

impl Rewriter {
    /// A rewriter with no rules; see [`Rewriter::with_rule`].
    pub fn new<S: Into<String>>(extension: S) -> Self {
        Self { rules: Vec::new(), extension: extension.into(), dry_run: false }
    }

    /// The import-form rule followed by the require-form rule.
    pub fn standard<S: Into<String>>(extension: S) -> Result<Self> {
        Ok(Self::new(extension)
            .with_rule(SpecifierRule::import_from()?)
            .with_rule(SpecifierRule::require_call()?))
    }

    pub fn with_rule<R: RewriteRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// When set, [`Rewriter::rewrite_file`] reports changes without writing them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs every rule over `content` in order.
    ///
    /// Borrowed means no rule matched at all. Owned text may still equal the
    /// input when every match already carried the extension.
    pub fn rewrite_text<'a>(&self, content: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(content);
        for rule in &self.rules {
            let next = match rule.apply(&current, &self.extension) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(next) => next,
            };
            log::trace!("Rule {} matched", rule.name());
            current = Cow::Owned(next);
        }
        current
    }

    /// Rewrites one file in place.
    ///
    /// I/O failures are returned as errors; callers treat them as fatal.
    pub fn rewrite_file<P: AsRef<Path>>(&self, path: P) -> Result<RewriteOutcome> {
        let path = path.as_ref();
        let content = read_text(path)?;
        let rewritten = self.rewrite_text(&content);

        if rewritten == content {
            log::debug!("No change: {}", path.display());
            return Ok(RewriteOutcome::Unchanged);
        }

        if self.dry_run {
            log::debug!("Dry run, not writing {}", path.display());
        } else {
            write_text(path, &rewritten)?;
        }
        Ok(RewriteOutcome::Updated)
    }
}
