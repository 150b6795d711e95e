//! Output side of the front end: speech, picture, error text, suggestions.

use std::io::Write;

use crate::answers::image::placeholder;
use crate::answers::{AnswerImage, DecodedImage, Resolution};

/// Display and speech surface the session drives
pub trait Presenter {
    fn speak(&mut self, text: &str);
    fn show_image(&mut self, image: &AnswerImage);
    fn show_error(&mut self, message: &str);
    fn clear_error(&mut self);
    fn set_busy(&mut self, busy: bool);
    fn show_suggestions(&mut self, words: &[&str]);
    fn hide_suggestions(&mut self);
}

/// Present a finished resolution.
///
/// Failures show their raw text and speak nothing; misses speak the
/// fallback sentence.
pub fn present<P: Presenter + ?Sized>(presenter: &mut P, resolution: &Resolution) {
    presenter.show_image(&resolution.image);
    if let Some(text) = resolution.outcome.spoken_text() {
        presenter.speak(text);
    }
    presenter.set_busy(false);
    if let Some(error) = resolution.error_text() {
        presenter.show_error(error);
    }
}

/// Terminal stand-in for the speaker and screen
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::warn!("Failed to write to console: {}", e);
        }
    }
}

pub fn describe_image(image: &AnswerImage) -> String {
    let decoded = match image {
        AnswerImage::Fetched(decoded) => decoded,
        AnswerImage::Placeholder => match placeholder() {
            Some(_) => return "[picture: placeholder]".to_string(),
            None => return "[picture: none]".to_string(),
        },
    };
    match decoded {
        DecodedImage::Rgba { width, height, .. } => format!("[picture: {}x{} png]", width, height),
        DecodedImage::Encoded { format, bytes } => {
            format!("[picture: {}, {} bytes]", format.name(), bytes.len())
        }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn speak(&mut self, text: &str) {
        self.line(&format!("🔊 {}", text));
    }

    fn show_image(&mut self, image: &AnswerImage) {
        let description = describe_image(image);
        self.line(&description);
    }

    fn show_error(&mut self, message: &str) {
        self.line(&format!("⚠ {}", message));
    }

    fn clear_error(&mut self) {}

    fn set_busy(&mut self, busy: bool) {
        if busy {
            self.line("…");
        }
    }

    fn show_suggestions(&mut self, words: &[&str]) {
        self.line(&format!("Try: {}", words.join(", ")));
    }

    fn hide_suggestions(&mut self) {}
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::answers::types::{FALLBACK_MESSAGE, ImageFormat, Outcome};

    /// Records every call as a short string
    #[derive(Default)]
    pub struct RecordingPresenter {
        pub calls: Vec<String>,
    }

    impl Presenter for RecordingPresenter {
        fn speak(&mut self, text: &str) {
            self.calls.push(format!("speak:{}", text));
        }
        fn show_image(&mut self, image: &AnswerImage) {
            let kind = match image {
                AnswerImage::Fetched(_) => "fetched",
                AnswerImage::Placeholder => "placeholder",
            };
            self.calls.push(format!("image:{}", kind));
        }
        fn show_error(&mut self, message: &str) {
            self.calls.push(format!("error:{}", message));
        }
        fn clear_error(&mut self) {
            self.calls.push("clear_error".to_string());
        }
        fn set_busy(&mut self, busy: bool) {
            self.calls.push(format!("busy:{}", busy));
        }
        fn show_suggestions(&mut self, words: &[&str]) {
            self.calls.push(format!("suggestions:{}", words.len()));
        }
        fn hide_suggestions(&mut self) {
            self.calls.push("hide_suggestions".to_string());
        }
    }

    fn resolution(outcome: Outcome) -> Resolution {
        Resolution {
            outcome,
            image: AnswerImage::Placeholder,
            image_error: None,
        }
    }

    #[test]
    fn test_failure_shows_raw_error_and_stays_quiet() {
        let mut p = RecordingPresenter::default();
        present(
            &mut p,
            &resolution(Outcome::Failure {
                error_message: "network error: refused".to_string(),
            }),
        );
        assert_eq!(
            p.calls,
            vec!["image:placeholder", "busy:false", "error:network error: refused"]
        );
    }

    #[test]
    fn test_miss_speaks_fallback() {
        let mut p = RecordingPresenter::default();
        present(
            &mut p,
            &resolution(Outcome::RemoteMiss {
                fallback_message: FALLBACK_MESSAGE.to_string(),
            }),
        );
        assert_eq!(p.calls[1], format!("speak:{}", FALLBACK_MESSAGE));
        assert!(!p.calls.iter().any(|c| c.starts_with("error:")));
    }

    #[test]
    fn test_local_hit_with_image_error() {
        let mut p = RecordingPresenter::default();
        let mut r = resolution(Outcome::LocalHit {
            explanation: "A ball is round.".to_string(),
            keyword: "ball".to_string(),
        });
        r.image_error = Some("HTTP 500 for x".to_string());
        present(&mut p, &r);
        assert_eq!(
            p.calls,
            vec![
                "image:placeholder",
                "speak:A ball is round.",
                "busy:false",
                "error:HTTP 500 for x"
            ]
        );
    }

    #[test]
    fn test_console_output() {
        let mut buf = Vec::new();
        {
            let mut console = ConsolePresenter::new(&mut buf);
            console.speak("Hello.");
            console.show_image(&AnswerImage::Fetched(DecodedImage::Encoded {
                format: ImageFormat::Jpeg,
                bytes: vec![0; 42],
            }));
            console.show_suggestions(&["dog", "cat"]);
        }
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "🔊 Hello.\n[picture: jpeg, 42 bytes]\nTry: dog, cat\n");
    }

    #[test]
    fn test_describe_placeholder() {
        assert_eq!(describe_image(&AnswerImage::Placeholder), "[picture: placeholder]");
    }
}
