//! Human-readable CLI reports on stderr, JSON on stdout.

use std::io::{self, IsTerminal, Stderr, Write};

/// Outcome shown in front of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Pass,
    Warn,
    Fail,
}

impl Mark {
    fn glyph(self, color: bool) -> &'static str {
        match (self, color) {
            (Mark::Pass, true) => "\x1b[32m\u{2713}\x1b[0m",
            (Mark::Warn, true) => "\x1b[33m\u{26a0}\x1b[0m",
            (Mark::Fail, true) => "\x1b[31m\u{2717}\x1b[0m",
            (Mark::Pass, false) => "OK",
            (Mark::Warn, false) => "??",
            (Mark::Fail, false) => "!!",
        }
    }
}

/// Line-oriented report: a heading, marked lines, indented notes.
pub struct Report<W: Write> {
    out: W,
    color: bool,
}

impl Report<Stderr> {
    /// Report on stderr, coloured unless `NO_COLOR` is set or stderr is
    /// redirected.
    pub fn stderr() -> Self {
        let out = io::stderr();
        let color = std::env::var_os("NO_COLOR").is_none() && out.is_terminal();
        Self { out, color }
    }
}

impl<W: Write> Report<W> {
    pub fn with_writer(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn heading(&mut self, title: &str) {
        let title = self.wrap("\x1b[1m", title);
        let _ = writeln!(self.out, "  {title}");
    }

    pub fn line(&mut self, mark: Mark, label: &str, value: &str) {
        let glyph = mark.glyph(self.color);
        let _ = writeln!(self.out, "    {glyph} {label:<16} {value}");
    }

    /// Dimmed note aligned under the value column of [`Report::line`].
    pub fn note(&mut self, msg: &str) {
        let msg = self.wrap("\x1b[2m", msg);
        let _ = writeln!(self.out, "{:24}{msg}", "");
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn wrap(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) {
    if let Ok(s) = serde_json::to_string_pretty(value) {
        println!("{s}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(color: bool, build: impl FnOnce(&mut Report<Vec<u8>>)) -> String {
        let mut report = Report::with_writer(Vec::new(), color);
        build(&mut report);
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_report_layout() {
        let text = render(false, |r| {
            r.heading("Sitemap https://ketquamn.com/sitemap.xml");
            r.line(Mark::Pass, "Google", "HTTP 200");
            r.line(Mark::Fail, "Bing", "unreachable");
            r.note("connection refused");
        });

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  Sitemap https://ketquamn.com/sitemap.xml");
        assert_eq!(lines[1], "    OK Google           HTTP 200");
        assert_eq!(lines[2], "    !! Bing             unreachable");
        assert_eq!(lines[3], format!("{}connection refused", " ".repeat(24)));
    }

    #[test]
    fn test_colored_report_uses_escape_codes() {
        let text = render(true, |r| {
            r.line(Mark::Warn, "density", "0.40%");
            r.note("crawl-delay 1s");
        });
        assert!(text.contains("\x1b[33m\u{26a0}\x1b[0m density"));
        assert!(text.contains("\x1b[2mcrawl-delay 1s\x1b[0m"));
    }
}
