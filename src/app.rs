use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, select};

use crate::answers::{ResolveResult, ResolverHandle, SUGGESTIONS};
use crate::autoplay::AutoPlay;
use crate::presenter::{Presenter, present};
use crate::session::{Effect, Event, Session};

/// Recognizer code reported when nothing was heard
pub const ERROR_NO_MATCH: i32 = 7;

/// Line typed into the interactive front end
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    ShowSuggestions,
    Tap(String),
    Speech(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line == ":quit" || line == ":q" {
            return Input::Quit;
        }
        if line == ":suggest" {
            return Input::ShowSuggestions;
        }
        if let Some(word) = line.strip_prefix(":tap ") {
            return Input::Tap(word.trim().to_string());
        }
        Input::Speech(line.to_string())
    }
}

/// Interactive-thread side: owns the session and the presenter, talks to
/// the resolver worker.
pub struct App<P: Presenter> {
    session: Session,
    resolver: ResolverHandle,
    presenter: P,
    pending: Option<u64>,
}

impl<P: Presenter> App<P> {
    pub fn new(resolver: ResolverHandle, presenter: P) -> Self {
        Self {
            session: Session::new(),
            resolver,
            presenter,
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn dispatch(&mut self, event: Event) {
        for effect in self.session.handle(event) {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::StartListening => log::debug!("Listening"),
            Effect::ClearError => self.presenter.clear_error(),
            Effect::HideSuggestions => self.presenter.hide_suggestions(),
            Effect::ShowSuggestions => self.presenter.show_suggestions(&SUGGESTIONS),
            Effect::ShowError(message) => self.presenter.show_error(&message),
            Effect::Resolve(question) => {
                self.presenter.clear_error();
                self.presenter.set_busy(true);
                self.pending = Some(self.resolver.submit(&question));
            }
            Effect::Present(resolution) => {
                present(&mut self.presenter, &resolution);
                self.dispatch(Event::PresentationFinished);
            }
        }
    }

    fn on_result(&mut self, result: ResolveResult) {
        if self.pending != Some(result.id) {
            log::debug!(
                "Dropping stale resolution #{} ({:?}) while {:?}",
                result.id,
                result.question,
                self.session.state()
            );
            return;
        }
        log::debug!("Presenting #{}: {:?}", result.id, result.question);
        self.pending = None;
        self.dispatch(Event::ResolutionComplete(result.resolution));
    }

    /// Block until the outstanding resolution has been presented
    pub fn settle(&mut self) -> Result<()> {
        while self.pending.is_some() {
            let result = self
                .resolver
                .results()
                .recv()
                .context("resolver worker stopped")?;
            self.on_result(result);
        }
        Ok(())
    }

    /// Ask one question as if it had been spoken
    pub fn ask(&mut self, question: &str) -> Result<()> {
        self.dispatch(Event::StartRequested);
        self.dispatch(Event::RecognitionResult(question.to_string()));
        self.settle()
    }

    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input::Quit => {}
            Input::ShowSuggestions => self.presenter.show_suggestions(&SUGGESTIONS),
            Input::Tap(word) => self.dispatch(Event::SuggestionTapped(word)),
            Input::Speech(text) => {
                self.dispatch(Event::StartRequested);
                if text.is_empty() {
                    self.dispatch(Event::RecognitionError(ERROR_NO_MATCH));
                } else {
                    self.dispatch(Event::RecognitionResult(text));
                }
            }
        }
    }

    /// Run until `:quit` or the input channel closes
    pub fn run_interactive(&mut self, lines: Receiver<String>) -> Result<()> {
        let results = self.resolver.results().clone();
        self.presenter.show_suggestions(&SUGGESTIONS);
        loop {
            select! {
                recv(lines) -> line => match line {
                    Ok(line) => {
                        let input = Input::parse(&line);
                        if input == Input::Quit {
                            break;
                        }
                        self.handle_input(input);
                    }
                    Err(_) => break,
                },
                recv(results) -> result => {
                    let result = result.context("resolver worker stopped")?;
                    self.on_result(result);
                }
            }
        }
        // Let an in-flight answer finish before leaving
        self.settle()
    }

    /// Play builtin items one after another, `delay` apart
    pub fn run_autoplay<R: rand::Rng>(
        &mut self,
        play: &mut AutoPlay<R>,
        count: Option<usize>,
        delay: Duration,
    ) -> Result<usize> {
        let mut played = 0;
        play.start();
        while play.is_active() {
            if count.is_some_and(|limit| played >= limit) {
                play.stop();
                break;
            }
            if played > 0 {
                thread::sleep(delay);
            }
            let Some(item) = play.next_item() else {
                break;
            };
            log::info!(
                "Autoplay: {} ({:.0}% of round)",
                item,
                play.progress() * 100.0
            );
            self.dispatch(Event::SuggestionTapped(item));
            self.settle()?;
            played += 1;
        }
        Ok(played)
    }
}
