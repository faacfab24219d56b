use super::Host;
use crate::loader::Progress;
use camino::Utf8Path;
use owo_colors::OwoColorize;
use std::io::Write;

/// Announces each snapshot file on the host's error stream as it is loaded
pub struct ProgressReporter<'a, H: Host> {
    host: &'a mut H,
    use_colors: bool,
    files: usize,
}

impl<'a, H: Host> ProgressReporter<'a, H> {
    pub const fn new(host: &'a mut H, use_colors: bool) -> Self {
        Self {
            host,
            use_colors,
            files: 0,
        }
    }

    /// Number of files announced so far
    #[must_use]
    pub const fn files(&self) -> usize {
        self.files
    }
}

impl<H: Host> Progress for ProgressReporter<'_, H> {
    fn file_loading(&mut self, path: &Utf8Path) {
        self.files += 1;

        let name = path.file_name().unwrap_or_else(|| path.as_str());
        let prefix = "Pulling data from";
        let _ = if self.use_colors {
            writeln!(self.host.error(), "{} {name}...", prefix.cyan())
        } else {
            writeln!(self.host.error(), "{prefix} {name}...")
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;

    #[test]
    fn test_announces_file_name_only() {
        let mut host = TestHost::new();
        let mut reporter = ProgressReporter::new(&mut host, false);
        reporter.file_loading(Utf8Path::new("temp/acme_widgets/pull_7.json"));
        reporter.file_loading(Utf8Path::new("temp/acme_widgets/issue_3.json"));
        assert_eq!(reporter.files(), 2);

        assert_eq!(host.error_text(), "Pulling data from pull_7.json...\nPulling data from issue_3.json...\n");
        assert!(host.output_buf.is_empty());
    }

    #[test]
    fn test_colored_prefix() {
        let mut host = TestHost::new();
        ProgressReporter::new(&mut host, true).file_loading(Utf8Path::new("issue_1.json"));
        assert!(host.error_text().contains("\x1b["));
        assert!(host.error_text().ends_with(" issue_1.json...\n"));
    }
}
