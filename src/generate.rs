// src/generate.rs
//! Generator pipeline: validate tables, seed the RNG, draw `count` records.

use chrono::{ Local, NaiveDate };
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{
    config::options::GenerateOptions,
    error::Result,
    persona::{ IndianNames, PersonaSource },
    progress::Progress,
    record::ContactRecord,
    reference::ReferenceTables,
    synth::{ PhoneRegistry, synthesize },
};

/// Reference date for a run: the fixed one if given, else today's local date.
pub fn resolve_today(opts: &GenerateOptions) -> NaiveDate {
    opts.today.unwrap_or_else(|| Local::now().date_naive())
}

/// Draw `opts.count` records with the built-in tables and persona source.
pub fn generate(opts: &GenerateOptions, progress: Option<&mut dyn Progress>) -> Result<Vec<ContactRecord>> {
    generate_with(&ReferenceTables::builtin(), &IndianNames, opts, progress)
}

/// Same as [`generate`] with caller-supplied tables and persona source.
/// Nothing is drawn if `tables` fails validation.
pub fn generate_with<P: PersonaSource>(
    tables: &ReferenceTables,
    persona: &P,
    opts: &GenerateOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ContactRecord>> {
    tables.validate()?;

    let today = resolve_today(opts);
    let mut rng = StdRng::seed_from_u64(opts.seed);
    let mut phones = if opts.unique_phones { PhoneRegistry::unique() } else { PhoneRegistry::per_call() };

    logf!("Generate: count={}, seed={}, today={today}, unique_phones={}",
        opts.count, opts.seed, opts.unique_phones);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.count);
        p.log("Generating records…");
    }

    let mut records = Vec::with_capacity(opts.count);
    for i in 1..=opts.count {
        let rec = synthesize(i, &mut rng, tables, persona, &mut phones, today)?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&rec.contact_id);
        }
        records.push(rec);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(records)
}
