//! Announcement text catalog.
//!
//! The coordinator never builds user-facing text itself; it asks a
//! [`Catalog`] for each message body. Name lists are joined with ", ".

use std::str::FromStr;

use super::hand_types::Hand;

pub const NAME_SEPARATOR: &str = ", ";

/// Message bodies and sender identity for judge announcements.
pub trait Catalog: Send + Sync {
    /// Fixed sender kind stored with every announcement.
    fn sender_kind(&self) -> &str {
        "judge"
    }
    fn display_name(&self) -> &str;
    fn hand_label(&self, hand: Hand) -> &str;

    fn battle_started(&self) -> String;
    fn extension(&self) -> String;
    fn timed_out(&self) -> String;
    fn draw(&self) -> String;
    fn winning_hand(&self, hand: Hand) -> String;
    fn winners(&self, authors: &[String]) -> String;
    fn roster(&self, hand: Hand, authors: &[String]) -> String;
    fn hand_submitted(&self, author: &str) -> String;
}

/// Built-in locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "ja-jp" => Ok(Locale::Ja),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

impl Locale {
    pub fn catalog(self) -> Box<dyn Catalog> {
        match self {
            Locale::Ja => Box::new(JaCatalog),
            Locale::En => Box::new(EnCatalog),
        }
    }
}

fn join(authors: &[String]) -> String {
    authors.join(NAME_SEPARATOR)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JaCatalog;

impl Catalog for JaCatalog {
    fn display_name(&self) -> &str {
        "ジャッジ"
    }

    fn hand_label(&self, hand: Hand) -> &str {
        match hand {
            Hand::Rock => "グー",
            Hand::Scissor => "チョキ",
            Hand::Paper => "パー",
        }
    }

    fn battle_started(&self) -> String {
        "じゃんけんが開始されました".to_string()
    }

    fn extension(&self) -> String {
        "メンバーが集まりませんでしたので延長します".to_string()
    }

    fn timed_out(&self) -> String {
        "一定時間内にメンバーが集まりませんでしたので、じゃんけんを終了します".to_string()
    }

    fn draw(&self) -> String {
        "じゃんけん結果: あいこ".to_string()
    }

    fn winning_hand(&self, hand: Hand) -> String {
        format!("じゃんけん結果: {}の勝ち", self.hand_label(hand))
    }

    fn winners(&self, authors: &[String]) -> String {
        format!("勝者: {}", join(authors))
    }

    fn roster(&self, hand: Hand, authors: &[String]) -> String {
        format!("{}のひと: {}", self.hand_label(hand), join(authors))
    }

    fn hand_submitted(&self, author: &str) -> String {
        format!("{author}が手を入力しました")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnCatalog;

impl Catalog for EnCatalog {
    fn display_name(&self) -> &str {
        "Judge"
    }

    fn hand_label(&self, hand: Hand) -> &str {
        match hand {
            Hand::Rock => "Rock",
            Hand::Scissor => "Scissors",
            Hand::Paper => "Paper",
        }
    }

    fn battle_started(&self) -> String {
        "The battle has begun".to_string()
    }

    fn extension(&self) -> String {
        "Not enough participants yet, extending the wait".to_string()
    }

    fn timed_out(&self) -> String {
        "Not enough participants joined in time, the battle is over".to_string()
    }

    fn draw(&self) -> String {
        "Result: draw".to_string()
    }

    fn winning_hand(&self, hand: Hand) -> String {
        format!("Result: {} wins", self.hand_label(hand))
    }

    fn winners(&self, authors: &[String]) -> String {
        format!("Winners: {}", join(authors))
    }

    fn roster(&self, hand: Hand, authors: &[String]) -> String {
        format!("{}: {}", self.hand_label(hand), join(authors))
    }

    fn hand_submitted(&self, author: &str) -> String {
        format!("{author} submitted a hand")
    }
}
