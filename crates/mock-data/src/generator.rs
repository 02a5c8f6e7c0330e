//! Plausible-value generators and record synthesis.

use fake::faker::address::en::{BuildingNumber, CityName, CountryName, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::FreeEmail;
use fake::faker::job::en::Title;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{FieldKind, GenerationRequest, Record, ResultSet};

/// Length of the token produced for unrecognized fields.
pub const SAMPLE_TOKEN_LEN: usize = 10;

/// A generator: draws one value from the given RNG.
pub type GenerateFn = fn(&mut StdRng) -> String;

impl FieldKind {
    /// The generator for this kind. Unknown fields get a random token.
    pub fn generator(self) -> GenerateFn {
        match self {
            FieldKind::Name => person_name,
            FieldKind::Email => email,
            FieldKind::Phone => phone,
            FieldKind::Address => street_address,
            FieldKind::Company => company,
            FieldKind::Job => job_title,
            FieldKind::City => city,
            FieldKind::Country => country,
            FieldKind::Other => sample_token,
        }
    }
}

fn person_name(rng: &mut StdRng) -> String {
    Name().fake_with_rng(rng)
}

fn email(rng: &mut StdRng) -> String {
    FreeEmail().fake_with_rng(rng)
}

fn phone(rng: &mut StdRng) -> String {
    PhoneNumber().fake_with_rng(rng)
}

fn street_address(rng: &mut StdRng) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    format!("{number} {street}")
}

fn company(rng: &mut StdRng) -> String {
    CompanyName().fake_with_rng(rng)
}

fn job_title(rng: &mut StdRng) -> String {
    Title().fake_with_rng(rng)
}

fn city(rng: &mut StdRng) -> String {
    CityName().fake_with_rng(rng)
}

fn country(rng: &mut StdRng) -> String {
    CountryName().fake_with_rng(rng)
}

/// Printable ASCII from `!` to `}`.
pub fn sample_token(rng: &mut StdRng) -> String {
    (0..SAMPLE_TOKEN_LEN)
        .map(|_| char::from(rng.gen_range(b'!'..=b'}')))
        .collect()
}

/// Builds result sets from validated requests.
///
/// Holds no state between calls: every `generate` builds a fresh RNG,
/// seeded from `seed` when one is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataGenerator {
    seed: Option<u64>,
}

impl MockDataGenerator {
    /// Generator drawing from OS entropy.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Deterministic generator: equal requests yield equal result sets.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Produce `request.count` records, each with one entry per requested field.
    pub fn generate(&self, request: &GenerationRequest) -> ResultSet {
        let dispatch: Vec<(&str, GenerateFn)> = request
            .fields
            .iter()
            .map(|field| (field.as_str(), FieldKind::parse(field).generator()))
            .collect();

        let mut rng = self.rng();
        let records = (0..request.count)
            .map(|_| {
                let mut record = Record::with_capacity(dispatch.len());
                for (field, generate) in &dispatch {
                    record.insert((*field).to_string(), generate(&mut rng));
                }
                record
            })
            .collect();

        tracing::trace!(
            "Generated {} record(s) with {} field(s)",
            request.count,
            dispatch.len()
        );

        ResultSet::new(records)
    }
}
