//! Listen / resolve / present cycle as an explicit state machine.
//!
//! `Session::handle` is pure: it consumes an event and returns the effects
//! the front end should carry out. Input arriving while a resolution is in
//! flight is dropped, which keeps at most one request outstanding.

use crate::answers::{Resolution, question_for};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Idle,
    Listening,
    Resolving,
    Presenting,
}

#[derive(Clone, Debug)]
pub enum Event {
    /// "Ask again" pressed
    StartRequested,
    /// Best recognizer hypothesis
    RecognitionResult(String),
    /// Recognizer error code
    RecognitionError(i32),
    SuggestionTapped(String),
    ResolutionComplete(Resolution),
    /// Speech and picture are done
    PresentationFinished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    StartListening,
    ClearError,
    HideSuggestions,
    ShowSuggestions,
    ShowError(String),
    Resolve(String),
    Present(Resolution),
}

#[derive(Debug)]
pub struct Session {
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        use SessionState::*;

        match (self.state, event) {
            (Idle | Presenting, Event::StartRequested) => {
                self.state = Listening;
                vec![
                    Effect::ClearError,
                    Effect::HideSuggestions,
                    Effect::StartListening,
                ]
            }
            (Listening, Event::RecognitionResult(text)) => {
                self.state = Resolving;
                vec![Effect::Resolve(text.to_lowercase())]
            }
            (Listening, Event::RecognitionError(code)) => {
                self.state = Idle;
                vec![
                    Effect::ShowError(format!("Speech recognition error: {}", code)),
                    Effect::ShowSuggestions,
                ]
            }
            (Idle | Presenting, Event::SuggestionTapped(word)) => {
                self.state = Resolving;
                vec![
                    Effect::HideSuggestions,
                    Effect::Resolve(question_for(&word)),
                ]
            }
            (Resolving, Event::ResolutionComplete(resolution)) => {
                self.state = Presenting;
                vec![Effect::Present(resolution)]
            }
            (Presenting, Event::PresentationFinished) => {
                self.state = Idle;
                Vec::new()
            }
            (state, event) => {
                log::debug!("Ignoring {:?} while {:?}", event, state);
                Vec::new()
            }
        }
    }
}
