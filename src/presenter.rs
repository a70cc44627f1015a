use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;

use crate::palette::Palette;
use crate::utils::strip_controls_and_escapes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question<'a> {
    pub number: usize,
    pub term: &'a str,
    pub definition: &'a str,
    pub acronym: bool,
}

impl Question<'_> {
    pub fn prompt(&self) -> String {
        if self.acronym {
            format!("What does '{}' stand for?", self.term)
        } else {
            format!("What is '{}'?", self.term)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Answer(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { given: String, expected: String },
}

impl Feedback {
    pub fn lines(&self) -> Vec<String> {
        match self {
            Feedback::Correct => vec!["✓ Correct!".to_string()],
            Feedback::Incorrect { given, expected } => vec![
                "✗ Incorrect.".to_string(),
                format!("Your answer: {given}"),
                format!("Correct answer: {expected}"),
            ],
        }
    }
}

/// The quiz loop's window on the user.
///
/// Presenters only show and collect text; deciding whether an answer is right
/// stays with the session.
pub trait Presenter {
    fn ask(&mut self, question: &Question<'_>) -> Result<Response>;

    fn show_feedback(&mut self, question: &Question<'_>, feedback: &Feedback) -> Result<()>;
}

pub fn is_quit_command(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}

fn to_response(raw: &str) -> Response {
    let answer = strip_controls_and_escapes(raw);
    if is_quit_command(&answer) {
        Response::Quit
    } else {
        Response::Answer(answer)
    }
}

/// Interactive prompt on the controlling terminal. Question banners and
/// feedback go to `out`; the answer prompt itself is drawn by dialoguer.
pub struct TerminalPresenter {
    theme: ColorfulTheme,
    out: Box<dyn Write>,
}

impl TerminalPresenter {
    pub fn with_writer(out: Box<dyn Write>) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            out,
        }
    }
}

impl Presenter for TerminalPresenter {
    fn ask(&mut self, question: &Question<'_>) -> Result<Response> {
        writeln!(
            self.out,
            "\n{}",
            Palette::paint(Palette::ACCENT, format!("Question {}:", question.number))
        )?;
        writeln!(self.out, "{}", question.prompt())?;
        self.out.flush()?;

        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt("Your answer")
            .allow_empty(true)
            .interact_text();

        match input {
            Ok(raw) => Ok(to_response(&raw)),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
                Ok(Response::Quit)
            }
            Err(err) => Err(err).context("failed to read answer"),
        }
    }

    fn show_feedback(&mut self, _question: &Question<'_>, feedback: &Feedback) -> Result<()> {
        let color = match feedback {
            Feedback::Correct => Palette::SUCCESS,
            Feedback::Incorrect { .. } => Palette::DANGER,
        };
        let mut lines = feedback.lines().into_iter();
        if let Some(headline) = lines.next() {
            writeln!(self.out, "{}", Palette::paint(color, headline))?;
        }
        for line in lines {
            writeln!(self.out, "{}", Palette::dim(line))?;
        }
        Ok(())
    }
}

/// Line-oriented presenter for piped input and tests. End of input counts as
/// quitting.
pub struct LinePresenter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePresenter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Presenter for LinePresenter<R, W> {
    fn ask(&mut self, question: &Question<'_>) -> Result<Response> {
        writeln!(self.writer, "\nQuestion {}:", question.number)?;
        writeln!(self.writer, "{}", question.prompt())?;
        write!(self.writer, "Your answer: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = match self.reader.read_line(&mut line) {
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => return Ok(Response::Quit),
            Err(err) => return Err(err).context("failed to read answer"),
        };
        if read == 0 {
            return Ok(Response::Quit);
        }
        Ok(to_response(&line))
    }

    fn show_feedback(&mut self, _question: &Question<'_>, feedback: &Feedback) -> Result<()> {
        for line in feedback.lines() {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }
}
