//! Batch asset processors: single-list renaming and light/dark
//! variant pairing.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use assetforge_core::{Asset, AssetPair, Error, NameStyle, Platform};

use crate::rule::{transform_name, NamingRule};

/// Tie-break applied when two assets in the same themed list
/// transform to the same final name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The later asset wins (the design source's most recent edit).
    #[default]
    LastWins,
    /// The earlier asset wins.
    FirstWins,
    /// Fail the batch with [`Error::DuplicateName`].
    Reject,
}

/// Drives the naming rule and case conversion over batches of assets.
///
/// Holds no cross-call state: one processor per asset group (icons,
/// images, colors, typography), and independent groups may be run on
/// parallel caller threads.
#[derive(Debug, Clone)]
pub struct AssetsProcessor {
    platform: Platform,
    rule: NamingRule,
    style: NameStyle,
    duplicates: DuplicatePolicy,
}

impl AssetsProcessor {
    pub fn new(platform: Platform, rule: NamingRule, style: NameStyle) -> Self {
        Self {
            platform,
            rule,
            style,
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Override the duplicate-name tie-break (default: last wins).
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Transform one raw name: validate, rewrite, case-convert.
    pub fn transform_name(&self, raw: &str) -> Result<String, Error> {
        transform_name(raw, &self.rule, self.style)
    }

    /// Rename a flat list of assets.
    ///
    /// Fail-fast: the first invalid name aborts the whole batch and no
    /// partial result is produced. Output is ordered by final name;
    /// input order does not survive. Two raw names mapping to the same
    /// final name yield two peer entries.
    pub fn process<A: Asset>(&self, assets: Vec<A>) -> Result<Vec<A>, Error> {
        debug!(
            count = assets.len(),
            platform = %self.platform,
            "processing asset batch"
        );
        let mut out = self.transform_batch(assets)?;
        out.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(out)
    }

    /// Pair light-mode assets with their dark-mode counterparts.
    ///
    /// Both lists are transformed fail-fast, then darks are matched to
    /// lights by final name. A dark asset without a light partner
    /// fails the batch with [`Error::UnmatchedVariant`]; a light asset
    /// without a dark partner is emitted with `dark: None`. Output is
    /// ordered by light name.
    pub fn process_pairs<A: Asset>(
        &self,
        light: Vec<A>,
        dark: Option<Vec<A>>,
    ) -> Result<Vec<AssetPair<A>>, Error> {
        debug!(
            light = light.len(),
            dark = dark.as_ref().map_or(0, Vec::len),
            platform = %self.platform,
            "pairing asset batch"
        );
        let light = self.transform_batch(light)?;
        let dark = match dark {
            Some(assets) => self.transform_batch(assets)?,
            None => Vec::new(),
        };

        // Index lights by final name. BTreeMap keeps the output in
        // name order.
        let mut pairs: BTreeMap<String, AssetPair<A>> = BTreeMap::new();
        for asset in light {
            let name = asset.name().to_string();
            match pairs.entry(name) {
                Entry::Vacant(slot) => {
                    slot.insert(AssetPair::new(asset, None));
                }
                Entry::Occupied(mut slot) => match self.duplicates {
                    DuplicatePolicy::LastWins => {
                        slot.insert(AssetPair::new(asset, None));
                    }
                    DuplicatePolicy::FirstWins => {}
                    DuplicatePolicy::Reject => {
                        return Err(Error::DuplicateName {
                            name: slot.key().clone(),
                        });
                    }
                },
            }
        }

        // Attach darks. Dark cardinality can never exceed the set of
        // reachable light names.
        for asset in dark {
            let name = asset.name().to_string();
            let Some(pair) = pairs.get_mut(&name) else {
                return Err(Error::UnmatchedVariant { name });
            };
            match self.duplicates {
                DuplicatePolicy::FirstWins if pair.dark.is_some() => {}
                DuplicatePolicy::Reject if pair.dark.is_some() => {
                    return Err(Error::DuplicateName { name });
                }
                _ => pair.dark = Some(asset),
            }
        }

        Ok(pairs.into_values().collect())
    }

    /// Transform every asset in a batch, dropping assets scoped to a
    /// different platform.
    fn transform_batch<A: Asset>(&self, assets: Vec<A>) -> Result<Vec<A>, Error> {
        let mut out = Vec::with_capacity(assets.len());
        for mut asset in assets {
            if let Some(platform) = asset.platform() {
                if platform != self.platform {
                    debug!(
                        name = asset.name(),
                        %platform,
                        "skipping asset scoped to another platform"
                    );
                    continue;
                }
            }
            let name = self.transform_name(asset.name())?;
            asset.set_name(name);
            out.push(asset);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use assetforge_core::Color;

    fn processor(style: NameStyle) -> AssetsProcessor {
        AssetsProcessor::new(Platform::Ios, NamingRule::none(), style)
    }

    #[test]
    fn output_sorted_by_final_name() {
        let colors = vec![
            Color::new("secondary_text", 0.5, 0.5, 0.5, 1.0),
            Color::new("primary_text", 0.0, 0.0, 0.0, 1.0),
        ];
        let out = processor(NameStyle::CamelCase).process(colors).unwrap();
        let names: Vec<_> = out.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["primaryText", "secondaryText"]);
    }

    #[test]
    fn duplicate_final_names_stay_as_peers_in_single_list() {
        let colors = vec![
            Color::new("primary_text", 0.0, 0.0, 0.0, 1.0),
            Color::new("primary/text", 1.0, 1.0, 1.0, 1.0),
        ];
        let out = processor(NameStyle::CamelCase).process(colors).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|c| c.name == "primaryText"));
    }

    #[test]
    fn pairing_duplicate_light_last_wins_by_default() {
        let light = vec![
            Color::new("primary_text", 0.0, 0.0, 0.0, 1.0),
            Color::new("primary/text", 1.0, 1.0, 1.0, 1.0),
        ];
        let pairs = processor(NameStyle::CamelCase)
            .process_pairs(light, None)
            .unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].light.red, 1.0);
    }

    #[test]
    fn pairing_duplicate_light_first_wins_when_configured() {
        let light = vec![
            Color::new("primary_text", 0.0, 0.0, 0.0, 1.0),
            Color::new("primary/text", 1.0, 1.0, 1.0, 1.0),
        ];
        let pairs = processor(NameStyle::CamelCase)
            .with_duplicate_policy(DuplicatePolicy::FirstWins)
            .process_pairs(light, None)
            .unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].light.red, 0.0);
    }

    #[test]
    fn pairing_duplicate_light_rejected_when_configured() {
        let light = vec![
            Color::new("primary_text", 0.0, 0.0, 0.0, 1.0),
            Color::new("primary/text", 1.0, 1.0, 1.0, 1.0),
        ];
        let result = processor(NameStyle::CamelCase)
            .with_duplicate_policy(DuplicatePolicy::Reject)
            .process_pairs(light, None);
        assert_matches!(
            result,
            Err(Error::DuplicateName { name }) if name == "primaryText"
        );
    }

    #[test]
    fn platform_scoped_assets_are_dropped_before_naming() {
        let colors = vec![
            Color::new("shared", 0.0, 0.0, 0.0, 1.0),
            Color::new("android only", 0.0, 0.0, 0.0, 1.0).with_platform(Platform::Android),
        ];
        let out = processor(NameStyle::CamelCase).process(colors).unwrap();
        let names: Vec<_> = out.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["shared"]);
    }
}
