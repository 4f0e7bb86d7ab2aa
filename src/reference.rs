// src/reference.rs
//! Embedded lookup data for the generator.
//!
//! Every table is an ordered list of `(key, values)` pairs rather than a map:
//! draw order must not depend on hash iteration, or a fixed seed would stop
//! reproducing the same dataset.

use crate::error::TableError;

pub type Keyed = Vec<(&'static str, Vec<&'static str>)>;

pub const AGE_GROUPS: [&str; 5] = ["18-25", "26-35", "36-45", "46-55", "55+"];
pub const GENDERS: [&str; 2] = ["M", "F"];
pub const CONTACT_FREQUENCIES: [&str; 4] = ["Weekly", "Bi-weekly", "Monthly", "Quarterly"];

pub const RATINGS: [(u8, f64); 5] = [(1, 0.05), (2, 0.10), (3, 0.15), (4, 0.30), (5, 0.40)];
pub const SENTIMENTS: [(&str, f64); 3] = [("Positive", 0.6), ("Neutral", 0.3), ("Negative", 0.1)];

pub const DIGITAL: &str = "Digital";
pub const TRADITIONAL: &str = "Traditional";
/// Payment class odds for the three older age groups.
pub const PAYMENT_CLASS_ODDS: [(&str, f64); 2] = [(DIGITAL, 0.7), (TRADITIONAL, 0.3)];
/// Age groups that always pay digitally.
pub const DIGITAL_ONLY_AGES: [&str; 2] = ["18-25", "26-35"];

pub const PREMIUM: &str = "Premium";
pub const VALUE: &str = "Value";

/// Occupations drawn at triple weight for an age group.
pub const PREFERRED_OCCUPATIONS: [(&str, [&str; 3]); 2] = [
    ("18-25", ["Student", "Software Engineer", "Sales Executive"]),
    ("55+", ["Retired", "Business Owner", "Consultant"]),
];
pub const PREFERRED_WEIGHT: f64 = 3.0;

pub const PHONE_PREFIXES: [&str; 12] =
    ["91", "92", "93", "94", "95", "96", "97", "98", "99", "70", "80", "89"];

#[derive(Clone, Debug)]
pub struct ReferenceTables {
    pub cities: Keyed,
    pub states: Keyed,
    pub festivals: Keyed,
    pub languages: Keyed,
    pub categories: Keyed,
    pub price_bands: Vec<(&'static str, (u32, u32))>,
    pub payment_methods: Keyed,
    pub segments: Keyed,
    pub occupations: Vec<&'static str>,
    pub channels: Vec<&'static str>,
    pub tier1: Vec<&'static str>,
    pub tier2: Vec<&'static str>,
}

/// Values for `key` in a keyed table.
pub fn lookup<'a>(table: &'a Keyed, key: &str) -> Option<&'a [&'static str]> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_slice())
}

impl ReferenceTables {
    /// Region keys, in table order.
    pub fn regions(&self) -> Vec<&'static str> {
        self.cities.iter().map(|(k, _)| *k).collect()
    }

    pub fn category_names(&self) -> Vec<&'static str> {
        self.categories.iter().map(|(k, _)| *k).collect()
    }

    pub fn segment_classes(&self) -> Vec<&'static str> {
        self.segments.iter().map(|(k, _)| *k).collect()
    }

    pub fn price_band(&self, category: &str) -> Option<(u32, u32)> {
        self.price_bands.iter().find(|(k, _)| *k == category).map(|(_, b)| *b)
    }

    /// Tier 1 / Tier 2 by fixed city sets, Tier 3 otherwise.
    pub fn tier_of(&self, city: &str) -> &'static str {
        if self.tier1.contains(&city) {
            "Tier 1"
        } else if self.tier2.contains(&city) {
            "Tier 2"
        } else {
            "Tier 3"
        }
    }

    /// Check every table a draw depends on. A failure here is a broken
    /// built-in table, not a runtime condition.
    pub fn validate(&self) -> Result<(), TableError> {
        non_empty("regions", &self.cities)?;
        for (region, cities) in &self.cities {
            if cities.is_empty() {
                return Err(TableError::Empty(format!("cities[{region}]")));
            }
            for (name, table) in [
                ("states", &self.states),
                ("festivals", &self.festivals),
                ("languages", &self.languages),
            ] {
                match lookup(table, region) {
                    None => return Err(TableError::MissingRegion { region: s!(*region), table: name }),
                    Some(v) if v.is_empty() => return Err(TableError::Empty(format!("{name}[{region}]"))),
                    Some(_) => {}
                }
            }
        }

        non_empty("categories", &self.categories)?;
        for (category, subs) in &self.categories {
            if subs.is_empty() {
                return Err(TableError::Empty(format!("categories[{category}]")));
            }
            let (min, max) = self.price_band(category)
                .ok_or_else(|| TableError::MissingPriceBand(s!(*category)))?;
            if min > max {
                return Err(TableError::InvertedBand { category: s!(*category), min, max });
            }
        }

        for (class, _) in PAYMENT_CLASS_ODDS {
            match lookup(&self.payment_methods, class) {
                Some(v) if !v.is_empty() => {}
                _ => return Err(TableError::MissingClass("payment", s!(class))),
            }
        }
        non_empty("segments", &self.segments)?;
        for class in [PREMIUM, VALUE] {
            if lookup(&self.segments, class).is_none() {
                return Err(TableError::MissingClass("segment", s!(class)));
            }
        }
        for (class, labels) in &self.segments {
            if labels.is_empty() {
                return Err(TableError::MissingClass("segment", s!(*class)));
            }
        }

        if self.occupations.is_empty() {
            return Err(TableError::Empty(s!("occupations")));
        }
        if self.channels.is_empty() {
            return Err(TableError::Empty(s!("channels")));
        }
        Ok(())
    }

    /// The tables shipped with the generator.
    pub fn builtin() -> Self {
        Self {
            cities: vec![
                ("North", vec![
                    "Delhi", "Gurgaon", "Noida", "Chandigarh", "Lucknow", "Kanpur", "Jaipur",
                    "Varanasi", "Agra", "Dehradun", "Meerut", "Amritsar", "Ludhiana",
                ]),
                ("South", vec![
                    "Bangalore", "Chennai", "Hyderabad", "Mysore", "Coimbatore", "Kochi",
                    "Thiruvananthapuram", "Visakhapatnam", "Mangalore", "Madurai", "Ooty",
                ]),
                ("East", vec![
                    "Kolkata", "Bhubaneswar", "Patna", "Guwahati", "Ranchi", "Siliguri",
                    "Cuttack", "Asansol", "Dhanbad", "Gangtok",
                ]),
                ("West", vec![
                    "Mumbai", "Pune", "Ahmedabad", "Surat", "Vadodara", "Nashik", "Nagpur",
                    "Indore", "Bhopal", "Raipur", "Goa",
                ]),
            ],
            states: vec![
                ("North", vec!["Delhi", "Uttar Pradesh", "Rajasthan", "Punjab", "Haryana", "Uttarakhand"]),
                ("South", vec!["Karnataka", "Tamil Nadu", "Telangana", "Kerala", "Andhra Pradesh"]),
                ("East", vec!["West Bengal", "Odisha", "Bihar", "Assam", "Jharkhand"]),
                ("West", vec!["Maharashtra", "Gujarat", "Madhya Pradesh", "Goa", "Chhattisgarh"]),
            ],
            festivals: vec![
                ("North", vec!["Diwali", "Holi", "Lohri", "Karva Chauth", "Dussehra"]),
                ("South", vec!["Pongal", "Onam", "Ugadi", "Sankranti", "Navratri"]),
                ("East", vec!["Durga Puja", "Chhath", "Bihu", "Jagannath Rath Yatra"]),
                ("West", vec!["Ganesh Chaturthi", "Gudi Padwa", "Navratri", "Diwali"]),
            ],
            languages: vec![
                ("North", vec!["Hindi", "Punjabi", "Haryanvi", "English"]),
                ("South", vec!["Tamil", "Telugu", "Kannada", "Malayalam", "English"]),
                ("East", vec!["Bengali", "Odia", "Assamese", "English"]),
                ("West", vec!["Marathi", "Gujarati", "Hindi", "English"]),
            ],
            categories: vec![
                ("Electronics", vec![
                    "Smartphones", "Laptops", "Tablets", "Smartwatches", "Headphones", "Cameras",
                    "Gaming Consoles",
                ]),
                ("Clothing", vec![
                    "Casual Wear", "Formal Wear", "Ethnic Wear", "Sports Wear", "Winter Wear",
                    "Accessories",
                ]),
                ("Home Decor", vec![
                    "Furniture", "Lighting", "Wall Art", "Carpets", "Plants", "Kitchen Decor",
                ]),
                ("Beauty", vec!["Skincare", "Makeup", "Haircare", "Fragrances", "Organic Products"]),
                ("Books", vec!["Fiction", "Non-Fiction", "Academic", "Self-Help", "Children Books"]),
                ("Sports", vec!["Fitness Equipment", "Sports Gear", "Outdoor Equipment", "Yoga Accessories"]),
                ("Kitchen", vec!["Appliances", "Cookware", "Dining", "Storage", "Small Appliances"]),
            ],
            price_bands: vec![
                ("Electronics", (15_000, 150_000)),
                ("Clothing", (1_000, 15_000)),
                ("Home Decor", (2_000, 50_000)),
                ("Beauty", (500, 10_000)),
                ("Books", (200, 2_000)),
                ("Sports", (1_000, 20_000)),
                ("Kitchen", (1_000, 30_000)),
            ],
            payment_methods: vec![
                (DIGITAL, vec!["UPI", "Net Banking", "Credit Card", "Debit Card", "Mobile Wallet"]),
                (TRADITIONAL, vec!["Cash on Delivery", "Bank Transfer", "EMI", "Gift Card"]),
            ],
            segments: vec![
                (VALUE, vec!["Budget Buyer", "Value Seeker", "Discount Hunter", "Seasonal Shopper"]),
                (PREMIUM, vec!["Luxury Buyer", "Premium Member", "VIP Customer", "High-Value Client"]),
                ("Loyalty", vec!["Loyal Customer", "Regular Buyer", "Brand Advocate", "Long-term Client"]),
                ("New", vec!["New Customer", "First-time Buyer", "Trial User", "Recent Convert"]),
            ],
            occupations: vec![
                "Software Engineer", "Data Scientist", "Doctor", "Surgeon", "Teacher", "Professor",
                "Business Owner", "Entrepreneur", "Student", "Sales Executive", "Marketing Manager",
                "Consultant", "Retired", "Homemaker", "Manager", "Architect", "Designer",
                "Financial Analyst", "Lawyer", "Chef", "Artist", "Writer", "Journalist",
                "HR Professional", "Accountant", "Civil Engineer", "Pharmacist", "Real Estate Agent",
            ],
            channels: vec![
                "Email", "SMS", "WhatsApp", "Phone Call", "Social Media", "Mobile App",
                "Website", "Direct Mail", "Video Call", "In-Store",
            ],
            tier1: vec!["Mumbai", "Delhi", "Bangalore", "Chennai", "Hyderabad"],
            tier2: vec!["Pune", "Kolkata", "Ahmedabad", "Jaipur", "Lucknow"],
        }
    }
}

fn non_empty(name: &str, table: &Keyed) -> Result<(), TableError> {
    if table.is_empty() { Err(TableError::Empty(s!(name))) } else { Ok(()) }
}
