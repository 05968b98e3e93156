//! Synthetic invoice record generation.

mod pools;

pub use pools::{SamplePools, DEFAULT_POOLS};

use chrono::{NaiveDate, Utc};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use uuid::Builder;

use crate::error::{FatturaError, Result};
use crate::models::invoice::InvoiceRecord;

/// Lowest generated total, in cents.
pub const MIN_AMOUNT_CENTS: i64 = 5_000;

/// Highest generated total, in cents.
pub const MAX_AMOUNT_CENTS: i64 = 55_000;

const TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Source of randomness and time for the generator.
pub trait SampleSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform integer in `min..=max`.
    fn amount_cents(&mut self, min: i64, max: i64) -> i64;

    /// Date stamped on new invoices.
    fn today(&mut self) -> NaiveDate;

    /// Fresh transmission identifier.
    fn new_id(&mut self) -> String;

    /// Random lowercase alphanumeric token.
    fn token(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| TOKEN_CHARSET[self.pick_index(TOKEN_CHARSET.len())] as char)
            .collect()
    }
}

/// [`SampleSource`] backed by a `rand` generator.
///
/// Without a pinned date the current UTC date is used.
pub struct RngSource<R> {
    rng: R,
    pinned_date: Option<NaiveDate>,
}

/// Thread-local randomness and the system clock.
pub type SystemSource = RngSource<ThreadRng>;

/// Reproducible source for tests and fixtures.
pub type SeededSource = RngSource<StdRng>;

impl RngSource<ThreadRng> {
    pub fn system() -> Self {
        Self {
            rng: rand::rng(),
            pinned_date: None,
        }
    }
}

impl RngSource<StdRng> {
    /// Seeded generator that stamps every invoice with `date`.
    pub fn seeded(seed: u64, date: NaiveDate) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            pinned_date: Some(date),
        }
    }
}

impl<R: Rng> SampleSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn amount_cents(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    fn today(&mut self) -> NaiveDate {
        self.pinned_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    fn new_id(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }
}

/// Produces [`InvoiceRecord`]s from the sample pools.
pub struct InvoiceGenerator<S> {
    source: S,
    pools: SamplePools,
}

impl InvoiceGenerator<SystemSource> {
    /// Generator using thread randomness and today's date.
    pub fn system() -> Self {
        Self::new(RngSource::system())
    }
}

impl<S: SampleSource> InvoiceGenerator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pools: DEFAULT_POOLS,
        }
    }

    /// Replace the sample pools.
    ///
    /// Every pool must hold at least one value. Pool values are written into
    /// the XML without escaping, so they must not contain markup characters.
    pub fn with_pools(mut self, pools: SamplePools) -> Result<Self> {
        if let Some(field) = pools.first_empty() {
            return Err(FatturaError::Config(format!("sample pool `{field}` is empty")));
        }
        self.pools = pools;
        Ok(self)
    }

    /// Generate one invoice record.
    pub fn generate(&mut self) -> InvoiceRecord {
        let pools = self.pools;
        // The number uses its own draw over the client pool, not the name's index.
        let number_index = self.source.pick_index(pools.client_names.len());
        let cents = self
            .source
            .amount_cents(MIN_AMOUNT_CENTS, MAX_AMOUNT_CENTS);

        InvoiceRecord {
            id: self.source.new_id(),
            date: self.source.today(),
            number: format!("00{}/2025", number_index + 1),
            total_amount: Decimal::new(cents, 2),
            client_name: self.pick(pools.client_names),
            client_tax_code: self.pick(pools.tax_codes),
            client_address: self.pick(pools.addresses),
            client_city: self.pick(pools.cities),
            client_province: self.pick(pools.provinces),
            client_postal_code: self.pick(pools.postal_codes),
        }
    }

    /// Random token for file names, drawn from the same source.
    pub fn token(&mut self, len: usize) -> String {
        self.source.token(len)
    }

    fn pick(&mut self, pool: &'static [&'static str]) -> String {
        pool[self.source.pick_index(pool.len())].to_string()
    }
}
