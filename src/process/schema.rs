// src/process/schema.rs
use anyhow::{anyhow, bail, Context, Result};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use std::sync::Arc;

/// Read schema for a headerless delimited file plus the columns to keep.
///
/// Every declared position becomes a nullable Utf8 field, so postal and
/// state codes keep their leading zeros. Declared names may repeat; the
/// projection is resolved to indices up front and duplicates never have to
/// be told apart by name afterwards.
#[derive(Debug, Clone)]
pub struct LayoutSchema {
    read_schema: SchemaRef,
    projection: Vec<usize>,
    output_schema: SchemaRef,
}

impl LayoutSchema {
    pub fn new(column_names: &[String], include_columns: &[String]) -> Result<Self> {
        if column_names.is_empty() {
            bail!("column layout is empty");
        }
        if include_columns.is_empty() {
            bail!("no columns selected for output");
        }

        let fields: Vec<Field> = column_names
            .iter()
            .map(|name| Field::new(name, DataType::Utf8, true))
            .collect();
        let read_schema = Arc::new(Schema::new(fields));

        let mut projection = Vec::with_capacity(include_columns.len());
        for name in include_columns {
            let idx = unique_position(column_names, name)?;
            if projection.contains(&idx) {
                bail!("column {:?} selected more than once", name);
            }
            projection.push(idx);
        }
        // output keeps the declared order
        projection.sort_unstable();

        let output_schema = Arc::new(
            read_schema
                .project(&projection)
                .context("projecting column layout")?,
        );

        Ok(Self {
            read_schema,
            projection,
            output_schema,
        })
    }

    /// All declared positions, as the reader sees them.
    pub fn read_schema(&self) -> SchemaRef {
        self.read_schema.clone()
    }

    pub fn projection(&self) -> &[usize] {
        &self.projection
    }

    /// Schema of the materialized table.
    pub fn output_schema(&self) -> SchemaRef {
        self.output_schema.clone()
    }
}

fn unique_position(column_names: &[String], name: &str) -> Result<usize> {
    let mut hits = column_names
        .iter()
        .enumerate()
        .filter(|(_, declared)| declared.as_str() == name)
        .map(|(i, _)| i);
    let first = hits
        .next()
        .ok_or_else(|| anyhow!("column {:?} is not in the declared layout", name))?;
    if hits.next().is_some() {
        bail!("column {:?} is declared more than once and cannot be selected", name);
    }
    Ok(first)
}
