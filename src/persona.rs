// src/persona.rs
//! Synthetic name + email for a contact.
//!
//! The generator only needs "a plausible person"; anything implementing
//! `PersonaSource` can stand in. The built-in source draws from embedded
//! Indian name lists with the caller's RNG, so a fixed seed pins the names
//! too.

use rand::Rng;
use rand::seq::IndexedRandom;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Persona {
    pub full_name: String,
    pub email: String,
}

pub trait PersonaSource {
    fn persona<R: Rng>(&self, rng: &mut R) -> Persona;
}

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Aditi", "Aditya", "Ananya", "Arjun", "Ayesha", "Bhavna", "Chetan", "Deepak",
    "Divya", "Farhan", "Gauri", "Harsh", "Ishaan", "Jaya", "Kabir", "Kavya", "Lakshmi",
    "Manish", "Meera", "Nikhil", "Neha", "Omkar", "Pooja", "Pranav", "Priya", "Rahul",
    "Riya", "Rohan", "Sanjana", "Saurabh", "Shreya", "Siddharth", "Sneha", "Tanvi", "Tarun",
    "Uma", "Varun", "Vidya", "Vikram", "Yash", "Zara",
];

const LAST_NAMES: &[&str] = &[
    "Agarwal", "Bhatt", "Chatterjee", "Das", "Desai", "Gill", "Gupta", "Iyer", "Jain",
    "Joshi", "Kapoor", "Khan", "Kulkarni", "Menon", "Mishra", "Nair", "Patel", "Pillai",
    "Rao", "Reddy", "Saxena", "Sen", "Shah", "Sharma", "Singh", "Sinha", "Thakur", "Verma",
];

const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com", "yahoo.co.in", "hotmail.com", "outlook.com", "rediffmail.com",
];

/// Built-in persona source.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndianNames;

impl PersonaSource for IndianNames {
    fn persona<R: Rng>(&self, rng: &mut R) -> Persona {
        // Lists are non-empty literals.
        let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Anil");
        let last = LAST_NAMES.choose(rng).copied().unwrap_or("Kumar");
        let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or("example.com");

        let f = first.to_ascii_lowercase();
        let l = last.to_ascii_lowercase();
        let user = match rng.random_range(0..3u8) {
            0 => format!("{f}.{l}"),
            1 => format!("{f}{l}"),
            _ => format!("{}{l}{:02}", &f[..1], rng.random_range(0..100u8)),
        };

        Persona {
            full_name: format!("{first} {last}"),
            email: format!("{user}@{domain}"),
        }
    }
}
