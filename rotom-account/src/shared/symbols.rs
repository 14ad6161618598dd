use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::{
    error::NormaliseError,
    model::instrument::{Asset, CurrencyPair},
};

// Wire codes are matched upper case with any dark pool suffix removed
fn normalise_code(code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    match code.strip_suffix(".D") {
        Some(stripped) => stripped.to_owned(),
        None => code,
    }
}

/*----- */
// Symbol table
/*----- */
// Immutable mapping between an exchange's wire spellings and canonical assets.
// Built once and shared by reference, so concurrent reads need no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    assets: HashMap<String, Asset>,
    pairs: HashMap<String, CurrencyPair>,
    preferred_assets: HashMap<Asset, String>,
    preferred_pairs: HashMap<CurrencyPair, String>,
}

impl SymbolTable {
    pub fn builder() -> SymbolTableBuilder {
        SymbolTableBuilder::default()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn resolve_asset(&self, code: &str) -> Result<Asset, NormaliseError> {
        self.assets
            .get(&normalise_code(code))
            .cloned()
            .ok_or_else(|| NormaliseError::unresolvable(code))
    }

    /// Resolve a wire pair code such as `XXBTZUSD` or `XBTUSD`.
    ///
    /// Explicit pair entries win. Otherwise every split point of the code is
    /// tried and exactly one split must resolve both halves as assets.
    pub fn resolve_pair(&self, code: &str) -> Result<CurrencyPair, NormaliseError> {
        let normalised = normalise_code(code);
        if let Some(pair) = self.pairs.get(&normalised) {
            return Ok(pair.clone());
        }

        let mut candidates = normalised
            .char_indices()
            .skip(1)
            .filter_map(|(index, _)| {
                let (base, quote) = normalised.split_at(index);
                Some(CurrencyPair::from((
                    self.assets.get(base)?.clone(),
                    self.assets.get(quote)?.clone(),
                )))
            })
            .collect::<Vec<_>>();
        candidates.sort();
        candidates.dedup();

        match candidates.len() {
            1 => Ok(candidates.remove(0)),
            0 => Err(NormaliseError::unresolvable(code)),
            _ => {
                debug!(
                    %code,
                    ?candidates,
                    "wire pair code splits into more than one pair"
                );
                Err(NormaliseError::unresolvable(code))
            }
        }
    }

    pub fn wire_asset(&self, asset: &Asset) -> Option<&str> {
        self.preferred_assets.get(asset).map(String::as_str)
    }

    // Reverse lookup used when the adapter layer builds requests
    pub fn wire_pair(&self, pair: &CurrencyPair) -> Option<String> {
        if let Some(code) = self.preferred_pairs.get(pair) {
            return Some(code.clone());
        }

        Some(format!(
            "{}{}",
            self.wire_asset(&pair.base)?,
            self.wire_asset(&pair.quote)?
        ))
    }
}

/*----- */
// Symbol table builder
/*----- */
#[derive(Debug, Default)]
pub struct SymbolTableBuilder {
    assets: Vec<(String, String)>,
    pairs: Vec<(String, String, String)>,
}

impl SymbolTableBuilder {
    // The first wire code given for an asset becomes its preferred spelling
    pub fn asset<S>(mut self, canonical: S, wire: S) -> Self
    where
        S: Into<String>,
    {
        self.assets.push((canonical.into(), wire.into()));
        self
    }

    pub fn assets<S, I>(self, canonical: S, wires: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let canonical = canonical.into();
        wires
            .into_iter()
            .fold(self, |builder, wire| builder.asset(canonical.clone(), wire.into()))
    }

    pub fn pair<S>(mut self, wire: S, base: S, quote: S) -> Self
    where
        S: Into<String>,
    {
        self.pairs.push((wire.into(), base.into(), quote.into()));
        self
    }

    pub fn build(self) -> Result<SymbolTable, NormaliseError> {
        let mut table = SymbolTable::default();

        for (canonical, wire) in self.assets {
            if canonical.trim().is_empty() || wire.trim().is_empty() {
                return Err(NormaliseError::Config(format!(
                    "empty asset code in alias {canonical:?} -> {wire:?}"
                )));
            }
            let asset = Asset::new(&canonical);
            let wire = normalise_code(&wire);

            insert_alias(&mut table.assets, wire.clone(), asset.clone())?;
            // Canonical codes always resolve to themselves
            insert_alias(&mut table.assets, asset.as_str().to_owned(), asset.clone())?;
            table.preferred_assets.entry(asset).or_insert(wire);
        }

        for (wire, base, quote) in self.pairs {
            if wire.trim().is_empty() || base.trim().is_empty() || quote.trim().is_empty() {
                return Err(NormaliseError::Config(format!(
                    "empty code in pair {wire:?} -> {base:?}/{quote:?}"
                )));
            }
            // Pair legs may use any known spelling but always land on the canonical asset
            let pair = CurrencyPair::from((
                canonical_leg(&table.assets, &wire, &base)?,
                canonical_leg(&table.assets, &wire, &quote)?,
            ));
            let wire = normalise_code(&wire);

            insert_alias(&mut table.pairs, wire.clone(), pair.clone())?;
            table.preferred_pairs.entry(pair).or_insert(wire);
        }

        debug!(
            assets = table.assets.len(),
            pairs = table.pairs.len(),
            "built symbol table"
        );

        Ok(table)
    }
}

fn canonical_leg(
    assets: &HashMap<String, Asset>,
    wire: &str,
    leg: &str,
) -> Result<Asset, NormaliseError> {
    assets.get(&normalise_code(leg)).cloned().ok_or_else(|| {
        NormaliseError::Config(format!("pair {wire:?} uses unknown asset {leg:?}"))
    })
}

fn insert_alias<V>(
    aliases: &mut HashMap<String, V>,
    wire: String,
    value: V,
) -> Result<(), NormaliseError>
where
    V: PartialEq + std::fmt::Display,
{
    match aliases.get(&wire) {
        Some(existing) if *existing != value => Err(NormaliseError::Config(format!(
            "wire code {wire} maps to both {existing} and {value}"
        ))),
        Some(_) => Ok(()),
        None => {
            aliases.insert(wire, value);
            Ok(())
        }
    }
}

/*----- */
// Symbol table config
/*----- */
// JSON form of a SymbolTable, e.g.
// {"assets":[{"canonical":"BTC","wire":["XBT","XXBT"]}],
//  "pairs":[{"wire":"XXBTZUSD","base":"BTC","quote":"USD"}]}
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SymbolTableConfig {
    #[serde(default)]
    pub assets: Vec<AssetAliases>,
    #[serde(default)]
    pub pairs: Vec<PairAlias>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetAliases {
    pub canonical: String,
    pub wire: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PairAlias {
    pub wire: String,
    pub base: String,
    pub quote: String,
}

impl SymbolTableConfig {
    pub fn from_json(payload: &str) -> Result<Self, NormaliseError> {
        serde_json::from_str(payload).map_err(|error| NormaliseError::Config(error.to_string()))
    }
}

impl TryFrom<SymbolTableConfig> for SymbolTable {
    type Error = NormaliseError;

    fn try_from(config: SymbolTableConfig) -> Result<Self, Self::Error> {
        let builder = config
            .assets
            .into_iter()
            .fold(SymbolTable::builder(), |builder, alias| {
                builder.assets(alias.canonical, alias.wire)
            });

        config
            .pairs
            .into_iter()
            .fold(builder, |builder, pair| {
                builder.pair(pair.wire, pair.base, pair.quote)
            })
            .build()
    }
}
