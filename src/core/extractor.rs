use crate::core::{Extraction, ProgressReporter, Result, User};
use regex::Regex;
use std::collections::HashSet;
use std::io::Write;

pub const DOMAIN_PATTERN: &str = r"@([a-zA-Z0-9.-]+)";
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

pub struct DomainExtractor {
    pattern: Regex,
    progress_interval: usize,
}

impl DomainExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(DOMAIN_PATTERN).expect("Invalid domain pattern"),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Lower-cased host following the first `@` that starts a valid host run.
    pub fn domain_of(&self, email: &str) -> Option<String> {
        self.pattern
            .captures(email)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_lowercase())
    }

    /// Collects the unique domains and streams `"<username> - <email>"` lines
    /// for every user with a non-empty email into `out`, in input order.
    ///
    /// Only users with an empty or missing email count as skipped; an email
    /// that does not match the pattern is still written but contributes no
    /// domain.
    pub fn extract<W: Write>(
        &self,
        users: &[User],
        out: &mut W,
        progress: &mut dyn ProgressReporter,
    ) -> Result<Extraction> {
        let total = users.len();
        let mut domains = HashSet::new();
        let mut skipped = 0;

        for (index, user) in users.iter().enumerate() {
            match user.email() {
                Some(email) => {
                    if let Some(domain) = self.domain_of(email) {
                        domains.insert(domain);
                    } else {
                        tracing::debug!("No domain in email of {}: {}", user.username, email);
                    }
                    writeln!(out, "{} - {}", user.username, email)?;
                }
                None => skipped += 1,
            }

            let current = index + 1;
            if current % self.progress_interval == 0 || current == total {
                progress.report(current, total);
            }
        }
        out.flush()?;

        tracing::info!("⚠️ Skipped {} users without emails.", skipped);
        Ok(Extraction { domains, skipped })
    }
}

impl Default for DomainExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::progress::NoProgress;

    #[derive(Default)]
    struct RecordingProgress {
        reports: Vec<(usize, usize)>,
    }

    impl ProgressReporter for RecordingProgress {
        fn report(&mut self, current: usize, total: usize) {
            self.reports.push((current, total));
        }
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_domains_are_lowercased_and_unique() {
        let users = vec![
            User::new("a", Some("a@Example.com")),
            User::new("b", Some("b@EXAMPLE.COM")),
            User::new("c", Some("c@other.org")),
        ];
        let mut out = Vec::new();

        let result = DomainExtractor::new()
            .extract(&users, &mut out, &mut NoProgress)
            .unwrap();

        assert_eq!(result.domains, set(&["example.com", "other.org"]));
        assert_eq!(result.skipped, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a - a@Example.com\nb - b@EXAMPLE.COM\nc - c@other.org\n"
        );
    }

    #[test]
    fn test_malformed_email_is_written_but_not_skipped() {
        let users = vec![
            User::new("alice", Some("alice@corp.io")),
            User::new("bob", Some("not-an-email")),
            User::new("carol", None),
            User::new("dave", Some("")),
        ];
        let mut out = Vec::new();

        let result = DomainExtractor::new()
            .extract(&users, &mut out, &mut NoProgress)
            .unwrap();

        assert_eq!(result.domains, set(&["corp.io"]));
        assert_eq!(result.skipped, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "alice - alice@corp.io\nbob - not-an-email\n"
        );
    }

    #[test]
    fn test_domain_stops_at_disallowed_character() {
        let extractor = DomainExtractor::new();

        assert_eq!(
            extractor.domain_of("Jane <jane@Mail.Example-Corp.com>"),
            Some("mail.example-corp.com".to_string())
        );
        assert_eq!(extractor.domain_of("trailing@"), None);
        assert_eq!(extractor.domain_of("no-at-sign"), None);
    }

    #[test]
    fn test_result_is_independent_of_order() {
        let mut users = vec![
            User::new("a", Some("a@x.org")),
            User::new("b", Some("b@Y.org")),
            User::new("c", Some("c@x.org")),
            User::new("d", None),
        ];
        let extractor = DomainExtractor::new();

        let forward = extractor.extract(&users, &mut Vec::<u8>::new(), &mut NoProgress).unwrap();
        users.reverse();
        let backward = extractor.extract(&users, &mut Vec::<u8>::new(), &mut NoProgress).unwrap();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_progress_reported_at_interval_and_end() {
        let users: Vec<User> = (0..5)
            .map(|i| User::new(format!("u{}", i), Some("u@example.com")))
            .collect();
        let mut progress = RecordingProgress::default();

        DomainExtractor::new()
            .with_progress_interval(2)
            .extract(&users, &mut Vec::<u8>::new(), &mut progress)
            .unwrap();

        assert_eq!(progress.reports, vec![(2, 5), (4, 5), (5, 5)]);
    }

    #[test]
    fn test_sink_failure_is_unhandled_error() {
        let users = vec![User::new("a", Some("a@example.com"))];

        let err = DomainExtractor::new()
            .extract(&users, &mut BrokenSink, &mut NoProgress)
            .unwrap_err();

        assert_eq!(err.exit_code(), 7);
    }
}
