//! This module contains the generator for the default player names. Any human-looking name will
//! do, so names are picked from two fixed lists of first and last names.

use fastrand::Rng;

/// This list holds the first names to pick from.
const FIRST_NAMES: [&str; 40] = [
    "Ada", "Alan", "Alice", "Amara", "Bea", "Bob", "Carol", "Chen", "Dana", "Diego", "Edith",
    "Emil", "Farah", "Felix", "Grace", "Gus", "Hana", "Hugo", "Ines", "Ivan", "Jade", "Jonas",
    "Kira", "Leo", "Lena", "Malik", "Mira", "Nadia", "Noah", "Olga", "Omar", "Priya", "Quinn",
    "Rosa", "Sami", "Tara", "Umar", "Vera", "Wes", "Yara",
];

/// This list holds the last names to pick from.
const LAST_NAMES: [&str; 32] = [
    "Abbott", "Baker", "Castillo", "Dalton", "Eriksen", "Fischer", "Garcia", "Hopper", "Ibsen",
    "Jensen", "Kowalski", "Lovelace", "Moreau", "Novak", "Okafor", "Petrov", "Quint", "Rossi",
    "Sato", "Turing", "Ulrich", "Varga", "Walsh", "Xu", "Yilmaz", "Zimmer", "Brennan", "Costa",
    "Duval", "Haddad", "Lindqvist", "Mbeki",
];

/// This function draws a "First Last" display name from the lists with the given random number
/// generator.
pub(crate) fn generate_name(rng: &mut Rng) -> String {
    let first = pick(&FIRST_NAMES, rng);
    let last = pick(&LAST_NAMES, rng);

    format!("{first} {last}")
}

/// Picks a uniformly random entry of a non-empty list.
fn pick(list: &[&'static str], rng: &mut Rng) -> &'static str {
    list.get(rng.usize(..list.len())).copied().unwrap_or_default()
}
