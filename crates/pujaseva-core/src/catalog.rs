// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The service catalog: a fixed, ordered list of offerings built once at
// startup.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use tracing::warn;

use crate::types::ServiceRecord;

/// Title of the catch-all entry that always sorts last.
pub const SENTINEL_TITLE: &str = "Any Other Puja Request";

/// Ordered, immutable sequence of service records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ServiceRecord>,
}

impl Catalog {
    /// Sort `records` by title and append the sentinel entry.
    ///
    /// The sentinel is appended after sorting, so it is last no matter where
    /// its own title would fall alphabetically.
    pub fn from_records(mut records: Vec<ServiceRecord>) -> Self {
        let collator = TitleCollator::new();
        records.sort_by(|a, b| collator.compare(&a.title, &b.title));
        records.push(sentinel());
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ServiceRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ServiceRecord> {
        self.records.iter()
    }

    /// First record whose title is exactly `title`.
    pub fn find(&self, title: &str) -> Option<&ServiceRecord> {
        self.records.iter().find(|r| r.title == title)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.title.as_str())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ServiceRecord;
    type IntoIter = std::slice::Iter<'a, ServiceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Build the catalog of offerings shown on the page.
pub fn build_catalog() -> Catalog {
    Catalog::from_records(offerings())
}

/// Root-locale collation for service titles.
///
/// Accented letters sort with their base letter, case is a tertiary
/// difference (lower case first) and a final byte comparison keeps the order
/// total for titles the collator considers equal.
pub struct TitleCollator {
    collator: Option<CollatorBorrowed<'static>>,
}

impl TitleCollator {
    pub fn new() -> Self {
        let collator = Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
            .map_err(|e| warn!(error = %e, "collation data unavailable; sorting titles by code point"))
            .ok();
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
            None => a.cmp(b),
        }
    }
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two titles the way a reader expects them alphabetised.
///
/// Builds a collator per call; sort through [`TitleCollator`] instead.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    TitleCollator::new().compare(a, b)
}

fn sentinel() -> ServiceRecord {
    ServiceRecord::new(
        SENTINEL_TITLE,
        "If you have a specific puja or ritual in mind that is not listed, please let us know. \
         We can accommodate various Vedic ceremonies tailored to your needs.",
        "images/generic.jpg",
    )
}

fn offerings() -> Vec<ServiceRecord> {
    vec![
        ServiceRecord::new(
            "Satyanarayan Puja",
            "A Vishnu Puja performed for prosperity, good health, family peace, success in new \
             beginnings, and protection from obstacles. Commonly done after major milestones or \
             on Purnima.",
            "images/satyanarayan.jpg",
        ),
        ServiceRecord::new(
            "Griha Pravesh",
            "A home-entering ceremony including Vastu Shanti, Navagraha Puja, and Havan to purify \
             the house, remove negative energies, and invite blessings before moving in.",
            "images/griha.jpg",
        ),
        ServiceRecord::new(
            "Naamkaran Ceremony",
            "The Vedic naming ceremony for newborns done to bless the child with health, \
             longevity, good fortune, and a harmonious identity aligned with their Nakshatra.",
            "images/naamkaran.jpg",
        ),
        ServiceRecord::new(
            "Vivah Sanskar",
            "A complete Hindu wedding ritual including Kanyadaan, Havan, Mangal Phera, and \
             Saptapadi to bless the couple with a harmonious, prosperous, and dharmic married \
             life.",
            "images/vivah.jpg",
        ),
        ServiceRecord::new(
            "Rudrabhishek",
            "A powerful Shiva ritual where the Shivalinga is bathed with milk, curd, honey, water, \
             and ghee, performed for removal of negativity, mental peace, health benefits, and \
             fulfillment of desires.",
            "images/rudra.jpg",
        ),
        ServiceRecord::new(
            "Graha Shanti",
            "A planetary pacification puja that reduces the negative effects of malefic planets, \
             improves health, career, relationships, and brings long-term peace and stability.",
            "images/graha.jpg",
        ),
    ]
}
