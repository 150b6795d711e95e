//! Panic reporting.
//!
//! The surface that displays a report is handed to `install` explicitly
//! instead of being looked up from process-wide state.

use std::backtrace::Backtrace;
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;
use std::thread;

/// Where a crash report is shown
pub trait ReportSurface: Send + Sync {
    fn show_report(&self, report: &CrashReport);
}

/// Details captured from one panic
#[derive(Clone, Debug)]
pub struct CrashReport {
    pub message: String,
    pub thread: String,
    pub location: Option<String>,
    pub timestamp: String,
    pub backtrace: String,
}

impl CrashReport {
    pub fn from_panic(info: &PanicHookInfo<'_>) -> Self {
        let payload = info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "No message".to_string()
        };

        Self {
            message,
            thread: thread::current().name().unwrap_or("<unnamed>").to_string(),
            location: info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column())),
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            backtrace: Backtrace::force_capture().to_string(),
        }
    }

    pub fn render(&self) -> String {
        let rule = "─".repeat(50);
        let mut out = String::new();
        out.push_str("UNCAUGHT PANIC\n\n");
        out.push_str(&format!("Message: {}\n", self.message));
        out.push_str(&format!("Thread: {}\n", self.thread));
        if let Some(location) = &self.location {
            out.push_str(&format!("Location: {}\n", location));
        }
        out.push_str(&format!("Time: {}\n\n", self.timestamp));
        out.push_str("Backtrace:\n");
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&self.backtrace);
        out.push('\n');
        out.push_str(&rule);
        out
    }
}

/// Log every panic and hand it to `surface`, then run the previous hook
pub fn install(surface: Arc<dyn ReportSurface>) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let report = CrashReport::from_panic(info);
        log::error!("Panic in thread {}: {}", report.thread, report.message);
        surface.show_report(&report);
        previous(info);
    }));
}

/// Writes reports to stderr
pub struct StderrSurface;

impl ReportSurface for StderrSurface {
    fn show_report(&self, report: &CrashReport) {
        eprintln!("{}", report.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> CrashReport {
        CrashReport {
            message: "index out of bounds".to_string(),
            thread: "main".to_string(),
            location: Some("src/main.rs:10:5".to_string()),
            timestamp: "2026-01-02 03:04:05".to_string(),
            backtrace: "0: whatis::main".to_string(),
        }
    }

    #[test]
    fn test_render_has_details() {
        let text = report().render();
        assert!(text.contains("Message: index out of bounds"));
        assert!(text.contains("Thread: main"));
        assert!(text.contains("Location: src/main.rs:10:5"));
        assert!(text.contains("Time: 2026-01-02 03:04:05"));
        assert!(text.contains("0: whatis::main"));
    }

    #[test]
    fn test_render_without_location() {
        let mut r = report();
        r.location = None;
        assert!(!r.render().contains("Location:"));
    }
}
