//! Terminal styling for onboarding output
//!
//! Everything the CLI prints goes to stdout, so styles are resolved against
//! that stream only. `owo-colors` decides whether color is emitted.

use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::{self, Display};

/// Semantic tone of a piece of output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Repository URLs, branch names, PR links
    Accent,
    /// The final "Done" and successful checks
    Success,
    /// Git's progress stream and trailing metadata
    Muted,
    /// Phase headers
    Emphasis,
}

impl Tone {
    const fn style(self) -> Style {
        match self {
            Self::Accent => Style::new().cyan(),
            Self::Success => Style::new().green(),
            Self::Muted => Style::new().dimmed(),
            Self::Emphasis => Style::new().bold(),
        }
    }
}

/// A value rendered with a [`Tone`] when stdout supports color
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    tone: Tone,
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.tone.style();
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(Stream::Stdout, |v| v.style(style))
        )
    }
}

/// Tone shorthands for anything printable
pub trait Stylize: Display {
    /// Render with `tone`
    fn tone(&self, tone: Tone) -> Styled<&Self> {
        Styled { value: self, tone }
    }

    /// [`Tone::Accent`]
    fn accent(&self) -> Styled<&Self> {
        self.tone(Tone::Accent)
    }

    /// [`Tone::Success`]
    fn success(&self) -> Styled<&Self> {
        self.tone(Tone::Success)
    }

    /// [`Tone::Muted`]
    fn muted(&self) -> Styled<&Self> {
        self.tone(Tone::Muted)
    }

    /// [`Tone::Emphasis`]
    fn emphasis(&self) -> Styled<&Self> {
        self.tone(Tone::Emphasis)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Green check mark printed when a run or auth check succeeds
pub fn check() -> Styled<&'static str> {
    "✓".tone(Tone::Success)
}

/// Arrow prefixing each git command echoed to the user
pub fn arrow() -> Styled<&'static str> {
    "→".tone(Tone::Accent)
}

/// `url` as an OSC 8 link when stdout supports it, plain text otherwise
pub fn hyperlink(url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}
