//! Text building blocks shared by the screens.

use shared::{
    domain::Segment,
    navigation::{Tab, View},
};

/// Line-oriented screen buffer.
#[derive(Debug, Default)]
pub struct Screen {
    lines: Vec<String>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, text: impl Into<String>) {
        let text = text.into();
        let rule = "=".repeat(text.chars().count());
        self.lines.push(text);
        self.lines.push(rule);
    }

    pub fn section(&mut self, text: impl Into<String>) {
        let text = text.into();
        let rule = "-".repeat(text.chars().count());
        self.blank();
        self.lines.push(text);
        self.lines.push(rule);
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

pub fn star(favorite: bool) -> &'static str {
    if favorite {
        "⭐"
    } else {
        "☆"
    }
}

pub fn score(value: f64) -> String {
    format!("{value:.2}")
}

pub fn schedule_stamp(segment: &Segment) -> String {
    format!(
        "{} · {}",
        segment.date.format("%b %-d"),
        segment.time.format("%H:%M")
    )
}

/// Brackets the selected label: `[All] Men Women`.
pub fn pill_row<'a>(pills: impl IntoIterator<Item = (&'a str, bool)>) -> String {
    pills
        .into_iter()
        .map(|(label, selected)| {
            if selected {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn tab_bar(current: View) -> String {
    let active = Tab::for_view(current);
    let row = pill_row(Tab::ALL.iter().map(|tab| (tab.label(), *tab == active)));
    format!("{}\n{row}", "─".repeat(40))
}
