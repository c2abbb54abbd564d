// src/inspect.rs

use anyhow::{anyhow, Context, Result};
use arrow::{
    array::{Array, StringArray},
    record_batch::RecordBatch,
};
use bytes::Bytes;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::file::reader::{FileReader, SerializedFileReader};

/// File-level facts about a Parquet artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSummary {
    pub columns: Vec<String>,
    pub rows: i64,
    pub row_groups: usize,
    pub created_by: Option<String>,
}

/// Read only the footer metadata.
pub fn summarize(data: Bytes) -> Result<ArtifactSummary> {
    let reader = SerializedFileReader::new(data).context("reading parquet footer")?;
    let meta = reader.metadata();
    let file_meta = meta.file_metadata();

    Ok(ArtifactSummary {
        columns: file_meta
            .schema_descr()
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect(),
        rows: file_meta.num_rows(),
        row_groups: meta.num_row_groups(),
        created_by: file_meta.created_by().map(str::to_string),
    })
}

/// Decode the whole artifact back into record batches.
pub fn read_batches(data: Bytes) -> Result<Vec<RecordBatch>> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(data)
        .context("opening parquet artifact")?
        .build()
        .context("building record batch reader")?;

    reader
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("decoding parquet artifact")
}

/// Flatten string-typed batches into rows. Null cells become `None`.
pub fn string_rows(batches: &[RecordBatch]) -> Result<Vec<Vec<Option<String>>>> {
    let mut rows = Vec::new();
    for batch in batches {
        let columns = batch
            .columns()
            .iter()
            .zip(batch.schema().fields())
            .map(|(col, field)| {
                col.as_any()
                    .downcast_ref::<StringArray>()
                    .ok_or_else(|| anyhow!("column {} is not a string column", field.name()))
            })
            .collect::<Result<Vec<_>>>()?;

        for i in 0..batch.num_rows() {
            rows.push(
                columns
                    .iter()
                    .map(|c| c.is_valid(i).then(|| c.value(i).to_string()))
                    .collect(),
            );
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;
    use crate::process::convert::delimited_to_parquet;
    use crate::test_support::NEW_YORK_ROW;

    #[test]
    fn summary_reports_footer() -> Result<()> {
        let artifact = delimited_to_parquet(NEW_YORK_ROW.as_bytes(), &SourceConfig::default())?;
        let summary = summarize(artifact.data)?;

        assert_eq!(summary.rows, 1);
        assert_eq!(summary.row_groups, 1);
        assert_eq!(summary.columns[1], "Postal Code");
        assert_eq!(summary.columns.len(), 7);
        Ok(())
    }

    #[test]
    fn empty_fields_decode_as_empty_strings() -> Result<()> {
        let text = "US\t96799\tPago Pago\t\tAS\t\t\t\t\t-14.2781\t-170.7025\t\n";
        let artifact = delimited_to_parquet(text.as_bytes(), &SourceConfig::default())?;
        let rows = string_rows(&read_batches(artifact.data)?)?;

        assert_eq!(rows[0][2].as_deref(), Some("Pago Pago"));
        assert_eq!(rows[0][3].as_deref(), Some(""));
        assert_eq!(rows[0][4].as_deref(), Some("AS"));
        assert_eq!(rows[0][5].as_deref(), Some(""));
        assert_eq!(rows[0][6].as_deref(), Some(""));
        Ok(())
    }

    #[test]
    fn corrupt_bytes_are_rejected() {
        assert!(summarize(Bytes::from_static(b"PAR1 nope")).is_err());
        assert!(read_batches(Bytes::from_static(b"nope")).is_err());
    }
}
