//! Job normalizer
//!
//! Projects remote job records into the rows written to disk. Node operators
//! suffix job names with version, OCR and network tags; those tails are cut
//! so the same feed reads the same across nodes.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::job::{NormalizedJob, RawJob};

static RE_VERSION_OR_OCR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(version.*|\| OCR.*)").unwrap());
static RE_NETWORK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)network.*").unwrap());
static RE_TRAILING_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\s*\|)+\s*$").unwrap());

/// Strips version, OCR and network tails plus any dangling `|` separator
///
/// Idempotent: `clean_name(&clean_name(s)) == clean_name(s)`.
pub fn clean_name(name: &str) -> String {
    let name = RE_VERSION_OR_OCR.replace_all(name, "");
    let name = RE_NETWORK.replace_all(&name, "");
    RE_TRAILING_SEPARATOR.replace(&name, "").into_owned()
}

/// Converts one remote record into its output row
///
/// Identifiers, timestamp and spec type pass through untouched; `contract`
/// is only set for spec variants that carry an address.
pub fn normalize_job(job: RawJob) -> NormalizedJob {
    NormalizedJob {
        name: clean_name(&job.name),
        contract: job.spec.contract_address,
        external_job_id: job.external_job_id,
        created_at: job.created_at,
        job_type: job.spec.typename,
    }
}

impl From<RawJob> for NormalizedJob {
    fn from(job: RawJob) -> Self {
        normalize_job(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::JobSpec;
    use proptest::prelude::*;

    fn raw_job(name: &str, spec: JobSpec) -> RawJob {
        RawJob {
            id: "42".to_string(),
            name: name.to_string(),
            external_job_id: "6d1bfe9d-3c55-4c4b-9a4a-8bd2d4b1d6a0".to_string(),
            created_at: "2022-11-03T08:15:30.123456Z".to_string(),
            spec,
        }
    }

    fn ocr_spec(contract: &str) -> JobSpec {
        JobSpec {
            typename: "OCRSpec".to_string(),
            contract_address: Some(contract.to_string()),
            key_bundle_id: Some("bundle".to_string()),
            transmitter_address: Some("0xtransmitter".to_string()),
        }
    }

    #[test]
    fn test_clean_name_strips_version_and_ocr_tail() {
        assert_eq!(
            clean_name("ETH/USD Price Feed | Version 3 | OCR 2"),
            "ETH/USD Price Feed"
        );
    }

    #[test]
    fn test_clean_name_strips_network_tail() {
        assert_eq!(clean_name("BTC/USD | Network: Mainnet"), "BTC/USD");
    }

    #[test]
    fn test_clean_name_is_case_insensitive() {
        assert_eq!(clean_name("LINK/USD | VERSION 1"), "LINK/USD");
        assert_eq!(clean_name("LINK/USD | ocr"), "LINK/USD ");
        assert_eq!(clean_name("LINK/USD NETWORK arbitrum"), "LINK/USD ");
    }

    #[test]
    fn test_clean_name_keeps_space_before_ocr_suffix() {
        // The separator goes with the OCR tag; only pipes are trimmed afterwards.
        assert_eq!(clean_name("SOL/USD | OCR"), "SOL/USD ");
    }

    #[test]
    fn test_clean_name_leaves_plain_names() {
        assert_eq!(clean_name("Keeper Registry"), "Keeper Registry");
        assert_eq!(clean_name(""), "");
        assert_eq!(clean_name("A | B"), "A | B");
    }

    #[test]
    fn test_clean_name_drops_stacked_separators() {
        assert_eq!(clean_name("DAI/USD | | Version 2"), "DAI/USD");
        assert_eq!(clean_name("DAI/USD |"), "DAI/USD");
    }

    #[test]
    fn test_normalize_passes_fields_through() {
        let raw = raw_job("ETH/USD | Version 1", ocr_spec("0xabc"));
        let normalized = normalize_job(raw.clone());

        assert_eq!(normalized.name, "ETH/USD");
        assert_eq!(normalized.contract.as_deref(), Some("0xabc"));
        assert_eq!(normalized.external_job_id, raw.external_job_id);
        assert_eq!(normalized.created_at, raw.created_at);
        assert_eq!(normalized.job_type, raw.spec.typename);
    }

    #[test]
    fn test_normalize_unrecognized_variant_has_null_contract() {
        let raw = raw_job(
            "Automation upkeep",
            JobSpec {
                typename: "KeeperSpec".to_string(),
                contract_address: None,
                key_bundle_id: None,
                transmitter_address: None,
            },
        );

        let normalized: NormalizedJob = raw.into();
        assert_eq!(normalized.contract, None);
        assert_eq!(normalized.job_type, "KeeperSpec");
    }

    proptest! {
        #[test]
        fn test_clean_name_idempotent(name in "[a-zA-Z0-9/: |\n]{0,48}") {
            let once = clean_name(&name);
            prop_assert_eq!(clean_name(&once), once);
        }

        #[test]
        fn test_clean_name_idempotent_with_tags(
            base in "[A-Z]{3}/[A-Z]{3}",
            tags in prop::collection::vec(
                prop_oneof![
                    Just(" | Version 3"),
                    Just(" | OCR 2"),
                    Just(" | Network: Mainnet"),
                    Just(" |"),
                    Just(" "),
                    Just("version"),
                    Just("| ocr"),
                ],
                0..5,
            ),
        ) {
            let name = format!("{}{}", base, tags.concat());
            let once = clean_name(&name);
            prop_assert_eq!(clean_name(&once), once.clone());
            prop_assert!(!once.ends_with('|'));
        }

        #[test]
        fn test_normalize_preserves_identity_fields(
            external_job_id in "[a-f0-9-]{1,36}",
            typename in "[A-Za-z]{1,16}Spec",
            created_at in "20[0-9]{2}-[01][0-9]-[0-3][0-9]T[0-2][0-9]:[0-5][0-9]:[0-5][0-9](\\.[0-9]{1,9})?(Z|[+-][01][0-9]:[0-5][0-9])",
        ) {
            let raw = RawJob {
                id: "1".to_string(),
                name: "feed".to_string(),
                external_job_id: external_job_id.clone(),
                created_at: created_at.clone(),
                spec: JobSpec {
                    typename: typename.clone(),
                    contract_address: None,
                    key_bundle_id: None,
                    transmitter_address: None,
                },
            };
            let normalized = normalize_job(raw);
            prop_assert_eq!(normalized.external_job_id, external_job_id);
            prop_assert_eq!(normalized.job_type, typename);
            prop_assert_eq!(normalized.created_at, created_at);
            prop_assert_eq!(normalized.contract, None);
        }
    }
}
