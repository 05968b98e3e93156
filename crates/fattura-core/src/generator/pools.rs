//! Fixed sample pools for synthetic buyers.

/// Independent value pools sampled for each `client_*` field.
#[derive(Debug, Clone, Copy)]
pub struct SamplePools {
    pub client_names: &'static [&'static str],
    pub tax_codes: &'static [&'static str],
    pub addresses: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub provinces: &'static [&'static str],
    pub postal_codes: &'static [&'static str],
}

/// Default Italian sample data. No value contains XML markup characters.
pub const DEFAULT_POOLS: SamplePools = SamplePools {
    client_names: &[
        "Mario Rossi",
        "Laura Bianchi",
        "Giovanni Verdi",
        "Anna Neri",
        "Elena Gialli",
    ],
    tax_codes: &[
        "RSSMRA80A01H501Z",
        "BNCLRA80B01F205Z",
        "VRDGNN85C03F205Z",
        "NRANNA95D04F205Z",
        "GLNLEN97E05F205Z",
    ],
    addresses: &[
        "Via Roma 10",
        "Piazza Italia 5",
        "Corso Buenos Aires 23",
        "Via Montenapoleone 15",
        "Viale Europa 34",
    ],
    cities: &["Milano", "Roma", "Napoli", "Torino", "Bologna"],
    provinces: &["MI", "RM", "NA", "TO", "BO"],
    postal_codes: &["20121", "00100", "80100", "10100", "40100"],
};

impl SamplePools {
    /// Name of the first pool with no values, if any.
    pub fn first_empty(&self) -> Option<&'static str> {
        [
            ("client_names", self.client_names),
            ("tax_codes", self.tax_codes),
            ("addresses", self.addresses),
            ("cities", self.cities),
            ("provinces", self.provinces),
            ("postal_codes", self.postal_codes),
        ]
        .into_iter()
        .find_map(|(name, pool)| pool.is_empty().then_some(name))
    }
}

impl Default for SamplePools {
    fn default() -> Self {
        DEFAULT_POOLS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_are_non_empty() {
        let pools = SamplePools::default();
        for pool in [
            pools.client_names,
            pools.tax_codes,
            pools.addresses,
            pools.cities,
            pools.provinces,
            pools.postal_codes,
        ] {
            assert_eq!(pool.len(), 5);
        }
        assert_eq!(pools.first_empty(), None);
    }

    #[test]
    fn test_pools_need_no_escaping() {
        let pools = SamplePools::default();
        let all = pools
            .client_names
            .iter()
            .chain(pools.tax_codes)
            .chain(pools.addresses)
            .chain(pools.cities)
            .chain(pools.provinces)
            .chain(pools.postal_codes);
        for value in all {
            assert!(!value.contains(['<', '>', '&', '"', '\'']), "{value}");
        }
    }
}
