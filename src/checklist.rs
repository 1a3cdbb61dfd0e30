use std::io::{self, ErrorKind, Write};

use anyhow::{Context, Result};
use serde::Serialize;

/// A content field every how-to guide entry should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub requirement: &'static str,
}

pub const FIELDS: [Field; 7] = [
    Field { name: "description", requirement: "Ausführliche Beschreibung hat" },
    Field { name: "usage", requirement: "Praktische Anwendungsbeispiele hat" },
    Field { name: "technologies", requirement: "Klar aufgelistet sind" },
    Field { name: "bestPractices", requirement: "Mit ✅ und ❌ Emojis" },
    Field { name: "troubleshooting", requirement: "Häufige Probleme + Lösungen" },
    Field { name: "tips", requirement: "Hilfreiche Tipps mit 💡" },
    Field { name: "code", requirement: "Nur die eigentlichen Code-Beispiele enthält" },
];

/// The full advisory text, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Checklist {
    pub title: &'static str,
    pub intro: &'static str,
    pub lead: &'static str,
    pub fields: &'static [Field],
    pub recommendation: &'static str,
}

impl Checklist {
    pub const STANDARD: Self = Self {
        title: "HowTo Guides Improvement Script",
        intro: "Dieses Script verbessert die Struktur aller How-To Guides",
        lead: "Es stellt sicher, dass:",
        fields: &FIELDS,
        recommendation: "Manuelle Verbesserung empfohlen für beste Ergebnisse!",
    };

    /// Underline is one character wider than the title.
    pub fn separator(&self) -> String {
        "=".repeat(self.title.chars().count() + 1)
    }

    /// Looks up a field by its exact key; `None` for anything not on the list.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![
            self.title.to_string(),
            self.separator(),
            String::new(),
            self.intro.to_string(),
            self.lead.to_string(),
        ];
        out.extend(self.fields.iter().map(|f| format!("- {}: {}", f.name, f.requirement)));
        out.push(String::new());
        out.push(self.recommendation.to_string());
        out
    }

    pub fn render(&self) -> String {
        self.lines().iter().map(|l| format!("{l}\n")).collect()
    }

    /// Emits the rendered text in one write and flushes.
    pub fn write_to(&self, w: &mut impl Write) -> io::Result<()> {
        w.write_all(self.render().as_bytes())?;
        w.flush()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Prints as text or JSON. A closed reader (`BrokenPipe`) ends output
    /// without error; any other write failure is returned.
    pub fn print_to(&self, w: &mut impl Write, json: bool) -> Result<()> {
        let written = if json {
            let doc = self.to_json().context("failed to serialize checklist")?;
            writeln!(w, "{doc}").and_then(|()| w.flush())
        } else {
            self.write_to(w)
        };

        match written {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
            other => other.context("failed to write checklist to stdout"),
        }
    }
}
