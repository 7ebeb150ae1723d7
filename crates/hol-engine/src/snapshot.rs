//! Container snapshots.
//!
//! A [`Snapshot`] is the serializable state of a [`Holidays`]
//! container: configuration plus the populated entries.  Restoring
//! re-binds the populate sources through an entity resolver so the
//! revived container keeps lazy expansion working.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use hol_core::errors::Result;
use hol_core::Category;
use hol_time::Date;
use serde::{Deserialize, Serialize};

use crate::entity::{resolve_subdivision, HolidayEntity};
use crate::holidays::{Holidays, Inner, Source};

/// Serializable state of a [`Holidays`] container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Entity codes, in source order.
    pub codes: Vec<String>,
    /// Bound subdivision per source.
    pub subdivs: Vec<Option<String>>,
    /// Whether observed entries were generated.
    pub observed: bool,
    /// Whether lookups populate missing years.
    pub expand: bool,
    /// Requested language.
    pub language: Option<String>,
    /// Active categories.
    pub categories: Vec<Category>,
    /// Populated years.
    pub years: Vec<i32>,
    /// Registered holidays.
    pub entries: Vec<(Date, String)>,
    /// Weekend days worked due to substitutions.
    pub weekend_workdays: Vec<Date>,
}

impl Holidays {
    /// Capture the container's full state.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.lock();
        Snapshot {
            codes: self.sources.iter().map(|s| s.entity.code().to_owned()).collect(),
            subdivs: self
                .sources
                .iter()
                .map(|s| s.subdiv.map(str::to_owned))
                .collect(),
            observed: self.observed,
            expand: self.expand,
            language: self.language.clone(),
            categories: self.categories.clone(),
            years: inner.years.iter().copied().collect(),
            entries: inner
                .entries
                .iter()
                .map(|(d, n)| (*d, n.clone()))
                .collect(),
            weekend_workdays: inner.weekend_workdays.iter().copied().collect(),
        }
    }

    /// Rebuild a container from a snapshot, resolving each stored code
    /// back to its entity.
    pub fn from_snapshot<F>(snapshot: Snapshot, resolve: F) -> Result<Holidays>
    where
        F: Fn(&str) -> Result<Arc<dyn HolidayEntity>>,
    {
        let mut sources = Vec::with_capacity(snapshot.codes.len());
        for (code, subdiv) in snapshot.codes.iter().zip(&snapshot.subdivs) {
            let entity = resolve(code)?;
            let subdiv = match subdiv {
                Some(requested) => Some(resolve_subdivision(entity.as_ref(), requested)?),
                None => None,
            };
            sources.push(Source { entity, subdiv });
        }

        let inner = Inner {
            entries: snapshot.entries.into_iter().collect(),
            years: snapshot.years.into_iter().collect::<BTreeSet<_>>(),
            weekend_workdays: snapshot.weekend_workdays.into_iter().collect(),
        };

        Ok(Holidays {
            sources,
            observed: snapshot.observed,
            expand: snapshot.expand,
            language: snapshot.language,
            categories: snapshot.categories,
            inner: Mutex::new(inner),
        })
    }
}
