use std::path::Path;

use anyhow::{Context, Error};

use gtconcord_core::{
    convert::{Converter, Missing},
    input, table, Filter,
};

pub struct Runner {
    reader: table::Reader<input::Reader>,
    converter: Converter,
    warnings: Warnings,
}

impl Runner {
    pub fn new(path: &Path, filter: Filter) -> Result<Self, Error> {
        let reader = input::open(path)
            .and_then(table::Reader::new)
            .with_context(|| {
                format!(
                    "Failed to read genotype table from provided path '{}'",
                    path.display()
                )
            })?;

        log::info!(
            "Found {} samples in genotype table header.",
            reader.header().samples().len()
        );

        let converter = Converter::new(filter, reader.header());

        Ok(Self {
            reader,
            converter,
            warnings: Warnings::default(),
        })
    }

    pub fn run(&mut self) -> Result<&Converter, Error> {
        while let Some(row) = self
            .reader
            .read_row()
            .context("Failed to read genotype table")?
        {
            self.converter.add_row(&row);

            for (sample, missing) in self.converter.current_missing() {
                self.warnings.warn_once(&self.converter, sample, missing);
            }
        }

        self.warnings.summarize();

        Ok(&self.converter)
    }
}

#[derive(Clone, Debug, Default)]
struct Warnings {
    counts: [usize; Missing::N],
}

impl Warnings {
    pub fn count(&self, missing: Missing) -> usize {
        self.counts[missing as u8 as usize]
    }

    pub fn count_mut(&mut self, missing: Missing) -> &mut usize {
        &mut self.counts[missing as u8 as usize]
    }

    pub fn warn_once(&mut self, converter: &Converter, sample: &str, missing: Missing) {
        if self.count(missing) == 0 {
            let label = converter
                .current_record()
                .map(|record| record.label.as_str())
                .unwrap_or("[unknown]");
            let reason = missing.reason();

            log::warn!(
                "Writing missing genotype for sample '{sample}' at SNP '{label}' due to {reason}. \
                This warning will be shown only once, with a summary at the end."
            );
        }

        *self.count_mut(missing) += 1;
    }

    pub fn summarize(&self) {
        for missing in Missing::VARIANTS {
            let count = self.count(missing);

            if count > 0 {
                let reason = missing.reason();

                log::warn!("Wrote {count} missing genotypes due to {reason}.");
            }
        }
    }
}
