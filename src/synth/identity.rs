//! Random personal and banking details.

use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};
use serde::Serialize;

use crate::flag::{CountryCode, flag_for};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
    "Sarah", "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Clark",
];

const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park",
    "Sunset", "River", "Church", "Mill", "Spring", "Ridge",
];

const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Road", "Lane", "Drive", "Court", "Way"];

const CITIES: &[(&str, &str)] = &[
    ("Springfield", "IL"),
    ("Riverside", "CA"),
    ("Franklin", "TN"),
    ("Greenville", "SC"),
    ("Bristol", "CT"),
    ("Clinton", "IA"),
    ("Fairview", "OR"),
    ("Madison", "WI"),
    ("Georgetown", "TX"),
    ("Salem", "MA"),
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

const BANKS: &[&str] = &[
    "First National Bank",
    "Citizens Trust",
    "Harbor Savings Bank",
    "Summit Federal",
    "Pioneer Credit Union",
    "Union Commerce Bank",
    "Lakeside Bank & Trust",
];

const ACCOUNT_PREFIXES: &[&str] = &["GB", "DE", "FR", "NL"];

/// A synthetic person with banking details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FakeIdentity {
    pub name: String,
    pub address: String,
    /// Country name followed by its flag.
    pub country: String,
    pub zip_code: String,
    pub email: String,
    pub phone_number: String,
    pub account_number: String,
    pub bank: String,
    pub routing_number: String,
}

/// Generates a complete identity.
pub fn generate_identity<R: Rng + ?Sized>(rng: &mut R) -> FakeIdentity {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let zip_code = digits(rng, 5);

    let (city, state) = CITIES.choose(rng).copied().unwrap_or(("Springfield", "IL"));
    let address = format!(
        "{} {} {}\n{city}, {state} {zip_code}",
        rng.gen_range(1..10_000),
        pick(rng, STREET_NAMES),
        pick(rng, STREET_SUFFIXES),
    );

    let country_name = CountryCode::iter()
        .choose(rng)
        .map_or("United States of America", |code| code.name());

    FakeIdentity {
        name: format!("{first} {last}"),
        address,
        country: format!("{country_name} {}", flag_for(country_name)),
        zip_code,
        email: format!(
            "{}.{}{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            rng.gen_range(1..100),
            pick(rng, EMAIL_DOMAINS)
        ),
        phone_number: format!(
            "({}) {}-{}",
            rng.gen_range(201..990),
            rng.gen_range(200..1000),
            digits(rng, 4)
        ),
        account_number: format!("{}00{}", pick(rng, ACCOUNT_PREFIXES), digits(rng, 14)),
        bank: pick(rng, BANKS).to_owned(),
        routing_number: routing_number(rng),
    }
}

/// Generates a nine-digit ABA routing number with a valid check digit.
pub fn routing_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut number = format!("{:02}", rng.gen_range(1..=12));
    number.push_str(&digits(rng, 6));

    let check = aba_check_digit(&number).unwrap_or(0);
    number.push(char::from(b'0' + check));
    number
}

/// Computes the ninth digit for the first eight digits of a routing number.
///
/// Returns `None` unless `first_eight` is exactly eight ASCII digits.
pub fn aba_check_digit(first_eight: &str) -> Option<u8> {
    const WEIGHTS: [u32; 8] = [3, 7, 1, 3, 7, 1, 3, 7];

    if first_eight.len() != 8 {
        return None;
    }

    let mut sum = 0;
    for (ch, weight) in first_eight.chars().zip(WEIGHTS) {
        sum += ch.to_digit(10)? * weight;
    }

    u8::try_from((10 - sum % 10) % 10).ok()
}

/// Checks a full nine-digit routing number.
pub fn is_valid_routing_number(number: &str) -> bool {
    number.len() == 9
        && number.is_char_boundary(8)
        && aba_check_digit(&number[..8])
            .is_some_and(|check| number[8..].parse::<u8>().ok() == Some(check))
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn digits<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
