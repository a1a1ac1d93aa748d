use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{cpp_types::aggregate_name, suite_gen::SuiteGenerator};

/// Field names per aggregate, in declaration order. Written next to the
/// generated source so other tooling can check it without parsing C++.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Layout {
    pub struct_count: usize,
    pub aggregates: Vec<AggregateLayout>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct AggregateLayout {
    pub name: String,
    pub fields: Vec<String>,
}

impl Layout {
    pub fn from_generator(gen: &mut SuiteGenerator) -> Self {
        let struct_count = gen.struct_count();
        Self {
            struct_count,
            aggregates: (1..=struct_count)
                .map(|id| AggregateLayout {
                    name: aggregate_name(id),
                    fields: gen.field_names(id),
                })
                .collect(),
        }
    }

    pub fn write_to_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("failed to serialize layout")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write layout to {}", path.display()))
    }
}
