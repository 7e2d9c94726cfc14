use crate::model::SlotId;
use anyhow::{bail, Context, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One shift slot: a same-day time window and a daily headcount target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDefinition {
    pub id: SlotId,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub headcount: u32,
}

impl SlotDefinition {
    pub fn new<S: AsRef<str>>(id: S, start: NaiveTime, end: NaiveTime, headcount: u32) -> Self {
        Self {
            id: SlotId::new(id),
            start,
            end,
            headcount,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.id.as_str().trim().is_empty() {
            bail!("slot id cannot be empty");
        }
        if self.start >= self.end {
            bail!("slot {} start must be before end", self.id.as_str());
        }
        Ok(())
    }
}

/// Ordered slot table. Iteration order is claim order: earlier slots get
/// first pick of staff during planning, so the order is part of the
/// configuration, not a detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCatalog {
    slots: Vec<SlotDefinition>,
}

impl SlotCatalog {
    pub fn new(slots: Vec<SlotDefinition>) -> Result<Self> {
        let catalog = Self { slots };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in restaurant day: morning 07:30-15:00 needing 2, early
    /// 10:00-16:00 needing 2, late 17:00-23:00 needing 2, and one all-day
    /// 07:30-23:00 slot.
    pub fn standard() -> Self {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        Self {
            slots: vec![
                SlotDefinition::new("morning", t(7, 30), t(15, 0), 2),
                SlotDefinition::new("early", t(10, 0), t(16, 0), 2),
                SlotDefinition::new("late", t(17, 0), t(23, 0), 2),
                SlotDefinition::new("all", t(7, 30), t(23, 0), 1),
            ],
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.slots.is_empty() {
            bail!("catalog must contain at least one slot");
        }
        for slot in &self.slots {
            slot.validate()?;
        }
        for (i, a) in self.slots.iter().enumerate() {
            if self.slots.iter().skip(i + 1).any(|b| b.id == a.id) {
                bail!("duplicate slot id: {}", a.id.as_str());
            }
        }
        Ok(())
    }

    pub fn slots(&self) -> &[SlotDefinition] {
        &self.slots
    }

    pub fn get(&self, id: &SlotId) -> Option<&SlotDefinition> {
        self.slots.iter().find(|s| &s.id == id)
    }

    /// Sum of all headcount targets: the most assignments one day can hold.
    pub fn daily_target(&self) -> u32 {
        self.slots.iter().map(|s| s.headcount).sum()
    }
}

impl Default for SlotCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn load_catalog_from_file<P: AsRef<Path>>(path: P) -> Result<SlotCatalog> {
    let data = fs::read(&path)
        .with_context(|| format!("reading catalog {}", path.as_ref().display()))?;
    let catalog: SlotCatalog = serde_json::from_slice(&data)
        .with_context(|| format!("parsing catalog {}", path.as_ref().display()))?;
    catalog.validate()?;
    Ok(catalog)
}

pub fn export_catalog_json<P: AsRef<Path>>(path: P, catalog: &SlotCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}
