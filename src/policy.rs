use itertools::iproduct;
use std::collections::HashMap;

pub const MISSING_TOKEN: &str = "./.";

const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// How a heterozygous genotype is reduced to one output letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HetMode {
    /// IUPAC ambiguity code for the allele pair.
    Iupac,
    /// The first-listed allele of the pair.
    FirstAllele,
    /// "N" for every heterozygous genotype.
    ConservativeN,
}

/// Exhaustive genotype-token map: all 16 ordered allele pairs over
/// {A,C,G,T} plus "./.". Built once per run and never mutated.
pub struct Policy {
    map: HashMap<String, String>,
}

impl Policy {
    pub fn new(het_mode: HetMode, miss: &str) -> Self {
        let mut map = HashMap::with_capacity(17);
        for (a, b) in iproduct!(BASES, BASES) {
            let encoded = if a == b {
                a.to_string()
            } else {
                match het_mode {
                    HetMode::Iupac => iupac_code(a, b).to_string(),
                    HetMode::FirstAllele => a.to_string(),
                    HetMode::ConservativeN => "N".to_string(),
                }
            };
            map.insert(format!("{a}/{b}"), encoded);
        }
        map.insert(MISSING_TOKEN.to_string(), miss.to_string());
        Self { map }
    }

    /// Exact-string lookup. `None` means the token is outside the 17-entry
    /// vocabulary; the caller decides whether that aborts the run.
    pub fn encode(&self, token: &str) -> Option<&str> {
        self.map.get(token).map(String::as_str)
    }
}

// Tokens are looked up as exact strings, so both orderings of each pair
// must resolve to the same code here.
fn iupac_code(a: char, b: char) -> char {
    match (a, b) {
        ('A', 'C') | ('C', 'A') => 'M',
        ('A', 'G') | ('G', 'A') => 'R',
        ('A', 'T') | ('T', 'A') => 'W',
        ('C', 'G') | ('G', 'C') => 'S',
        ('C', 'T') | ('T', 'C') => 'Y',
        ('G', 'T') | ('T', 'G') => 'K',
        _ => unreachable!("no ambiguity code for {a}/{b}"),
    }
}
