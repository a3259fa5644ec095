//! Chinese zodiac designation for a birth year.
//!
//! Uses the solar calendar year as given. The traditional year turns at the
//! lunar New Year (late January to mid February), so births early in the
//! year may belong to the previous animal by that reckoning; this module
//! deliberately does not apply that cutoff.

use serde::{Deserialize, Serialize};

/// Twelve-year animal cycle; index 0 corresponds to years ≡ 4 (mod 12).
pub const ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Five elements, each governing two consecutive years.
pub const ELEMENTS: [&str; 5] = ["Wood", "Fire", "Earth", "Metal", "Water"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChineseZodiac {
    pub animal: String,
    pub element: String,
    /// "{element} {animal}"
    pub pillar: String,
}

pub fn chinese_zodiac(year: i32) -> ChineseZodiac {
    let cycle_year = i64::from(year) - 4;
    let animal = ANIMALS[cycle_year.rem_euclid(12) as usize];
    let element = ELEMENTS[(cycle_year.rem_euclid(10) / 2) as usize];
    ChineseZodiac {
        animal: animal.to_string(),
        element: element.to_string(),
        pillar: format!("{element} {animal}"),
    }
}
