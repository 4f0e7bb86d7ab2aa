// src/synth.rs
//! One record per call: the conditional draw rules of the generator.
//!
//! Later draws read earlier ones (region → city/state/language/festival,
//! age group → occupation/payment, category → amount → segment), so the
//! order below is part of the contract: changing it changes every dataset
//! produced from a given seed.

use std::collections::HashSet;

use chrono::{ NaiveDate, TimeDelta };
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::TableError;
use crate::persona::PersonaSource;
use crate::record::{ self, ContactRecord };
use crate::reference::{ self as refs, ReferenceTables, lookup };

/// Issues `+91-XXXXXXXXXX` numbers.
///
/// `unique()` remembers every number for the lifetime of the registry and
/// redraws on collision. `per_call()` forgets between calls, which means the
/// collision check never fires; it exists to reproduce datasets made with
/// that behavior.
#[derive(Debug, Default)]
pub struct PhoneRegistry {
    seen: HashSet<String>,
    persistent: bool,
}

impl PhoneRegistry {
    pub fn unique() -> Self {
        Self { seen: HashSet::new(), persistent: true }
    }

    pub fn per_call() -> Self {
        Self { seen: HashSet::new(), persistent: false }
    }

    pub fn issued(&self) -> usize { self.seen.len() }

    pub fn issue<R: Rng>(&mut self, rng: &mut R) -> String {
        if !self.persistent {
            self.seen.clear();
        }
        loop {
            let number = draw_phone(rng);
            if self.seen.insert(number.clone()) {
                return number;
            }
        }
    }
}

fn draw_phone<R: Rng>(rng: &mut R) -> String {
    let prefix = refs::PHONE_PREFIXES.choose(rng).copied().unwrap_or("98");
    let mut number = format!("+91-{prefix}");
    for _ in 0..8 {
        let d: u8 = rng.random_range(0..10);
        number.push(char::from(b'0' + d));
    }
    number
}

/// Uniform draw from a non-empty list.
fn pick<R: Rng>(rng: &mut R, items: &[&'static str], what: &str) -> Result<&'static str, TableError> {
    items.choose(rng).copied().ok_or_else(|| TableError::Empty(s!(what)))
}

/// Uniform draw from the list stored under `key`.
fn pick_keyed<R: Rng>(
    rng: &mut R,
    table: &refs::Keyed,
    key: &str,
    what: &str,
) -> Result<&'static str, TableError> {
    let items = lookup(table, key).ok_or_else(|| TableError::Empty(format!("{what}[{key}]")))?;
    pick(rng, items, what)
}

/// Weighted draw. Weights need not sum to one; they are normalized by
/// the total before drawing.
pub fn pick_weighted<'a, T, R: Rng>(
    rng: &mut R,
    items: &'a [(T, f64)],
    what: &'static str,
) -> Result<&'a T, TableError> {
    items
        .choose_weighted(rng, |(_, w)| *w)
        .map(|(item, _)| item)
        .map_err(|_| TableError::Weights(what))
}

/// Occupation weights for an age group: 3 for the group's preferred
/// occupations, 1 otherwise.
pub fn occupation_weights(tables: &ReferenceTables, age_group: &str) -> Vec<(&'static str, f64)> {
    let preferred = refs::PREFERRED_OCCUPATIONS
        .iter()
        .find(|(age, _)| *age == age_group)
        .map(|(_, list)| list.as_slice())
        .unwrap_or(&[]);
    tables
        .occupations
        .iter()
        .map(|occ| {
            let w = if preferred.contains(occ) { refs::PREFERRED_WEIGHT } else { 1.0 };
            (*occ, w)
        })
        .collect()
}

/// Round to the nearest multiple of 100 (ties to even), kept inside the band.
pub fn round_amount(raw: f64, min: u32, max: u32) -> u32 {
    let rounded = ((raw / 100.0).round_ties_even() * 100.0) as u32;
    rounded.clamp(min, max)
}

/// Segment class from where the amount sits in its category's band.
/// `None` when the amount is unremarkable and the class is drawn freely.
pub fn segment_class_for(amount: u32, min: u32, max: u32) -> Option<&'static str> {
    let amount = f64::from(amount);
    if amount > 0.8 * f64::from(max) {
        Some(refs::PREMIUM)
    } else if amount < 1.2 * f64::from(min) {
        Some(refs::VALUE)
    } else {
        None
    }
}

/// Draw record number `index` (1-based).
///
/// Pure apart from the injected state: `rng`, the persona source and the
/// phone registry. `today` anchors the created/purchase dates.
pub fn synthesize<R: Rng, P: PersonaSource>(
    index: usize,
    rng: &mut R,
    tables: &ReferenceTables,
    persona: &P,
    phones: &mut PhoneRegistry,
    today: NaiveDate,
) -> Result<ContactRecord, TableError> {
    // 1) geography
    let region = pick(rng, &tables.regions(), "regions")?;
    let city = pick_keyed(rng, &tables.cities, region, "cities")?;
    let state = pick_keyed(rng, &tables.states, region, "states")?;

    // 2–3) age group → occupation
    let age_group = pick(rng, &refs::AGE_GROUPS, "age groups")?;
    let occupation = *pick_weighted(rng, &occupation_weights(tables, age_group), "occupations")?;

    // 4) product
    let category = pick(rng, &tables.category_names(), "categories")?;
    let subcategory = pick_keyed(rng, &tables.categories, category, "categories")?;
    let product_name = format!("{category} - {subcategory}");

    // 5) payment
    let payment_class = if refs::DIGITAL_ONLY_AGES.contains(&age_group) {
        refs::DIGITAL
    } else {
        *pick_weighted(rng, &refs::PAYMENT_CLASS_ODDS, "payment classes")?
    };
    let payment_method = pick_keyed(rng, &tables.payment_methods, payment_class, "payment methods")?;

    // 6) amount
    let (min, max) = tables
        .price_band(category)
        .ok_or_else(|| TableError::MissingPriceBand(s!(category)))?;
    let raw = rng.random_range(f64::from(min)..=f64::from(max));
    let purchase_amount = round_amount(raw, min, max);

    // 7) segment
    let segment_class = match segment_class_for(purchase_amount, min, max) {
        Some(class) => class,
        None => pick(rng, &tables.segment_classes(), "segments")?,
    };
    let segment_name = pick_keyed(rng, &tables.segments, segment_class, "segments")?;

    // 8) dates
    let created_date = today - TimeDelta::days(rng.random_range(30..=730));
    let purchase_date = created_date + TimeDelta::days(rng.random_range(1..=365));

    // 9) independent draws
    let gender = pick(rng, &refs::GENDERS, "genders")?;
    let preferred_channel = pick(rng, &tables.channels, "channels")?;
    let preferred_language = pick_keyed(rng, &tables.languages, region, "languages")?;
    let contact_frequency = pick(rng, &refs::CONTACT_FREQUENCIES, "contact frequencies")?;
    let rating = *pick_weighted(rng, &refs::RATINGS, "ratings")?;
    let sentiment = *pick_weighted(rng, &refs::SENTIMENTS, "sentiments")?;
    let preferred_festival = pick_keyed(rng, &tables.festivals, region, "festivals")?;

    // 10) person
    let who = persona.persona(rng);
    let phone = phones.issue(rng);

    Ok(ContactRecord {
        contact_id: record::contact_id(index),
        full_name: who.full_name,
        email: who.email,
        phone,
        gender: s!(gender),
        age_group: s!(age_group),
        occupation: s!(occupation),
        city: s!(city),
        state: s!(state),
        region: s!(region),
        // 11) tier
        tier: s!(tables.tier_of(city)),
        purchase_id: record::purchase_id(index),
        product_category: s!(category),
        product_name,
        purchase_amount,
        purchase_date,
        payment_method: s!(payment_method),
        preferred_channel: s!(preferred_channel),
        preferred_language: s!(preferred_language),
        contact_frequency: s!(contact_frequency),
        rating,
        sentiment: s!(sentiment),
        preferred_festival: s!(preferred_festival),
        segment_name: s!(segment_name),
        created_date,
    })
}
