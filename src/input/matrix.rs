use std::io::BufRead;
use std::path::Path;

use crate::input::value::parse_cell;
use crate::input::{InputError, LoadOptions, LoadReport};
use crate::model::matrix::{ExpressionMatrix, GeneCounts};

pub const COUNT_STAT: &str = "count";

const HEADER_PREFIX_FIELDS: usize = 2;
const MIN_FIELDS: usize = HEADER_PREFIX_FIELDS + 1;

pub fn read_count_matrix<R: BufRead>(
    mut reader: R,
    path: &Path,
    options: &LoadOptions,
) -> Result<(ExpressionMatrix, LoadReport), InputError> {
    let mut buf = String::new();

    // Header
    let read = reader
        .read_line(&mut buf)
        .map_err(|e| InputError::from_io(path, e))?;
    let header = if read == 0 {
        Vec::new()
    } else {
        strip_line_end(&buf).split('\t').collect::<Vec<_>>()
    };
    if header.len() < MIN_FIELDS {
        return Err(InputError::MalformedHeader {
            path: path.to_path_buf(),
            fields: header.len(),
        });
    }
    let tissues = header[HEADER_PREFIX_FIELDS..]
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    let mut data = GeneCounts::new();
    let mut report = LoadReport::default();
    let mut line_no = 1usize;

    loop {
        buf.clear();
        let n = reader
            .read_line(&mut buf)
            .map_err(|e| InputError::from_io(path, e))?;
        if n == 0 {
            break;
        }
        line_no += 1;
        let fields = strip_line_end(&buf).split('\t').collect::<Vec<_>>();
        if fields.len() < MIN_FIELDS {
            report.skipped_short_rows += 1;
            continue;
        }
        if fields[1].trim() != COUNT_STAT {
            report.dropped_stat_rows += 1;
            continue;
        }

        let gene = fields[0];
        let mut counts = Vec::with_capacity(fields.len() - HEADER_PREFIX_FIELDS);
        for raw in &fields[HEADER_PREFIX_FIELDS..] {
            let cell = parse_cell(raw);
            if cell.is_defaulted() {
                report.defaulted_cells += 1;
            }
            counts.push(cell.value());
        }

        if options.strict_row_length && counts.len() != tissues.len() {
            return Err(InputError::RowLengthMismatch {
                gene: gene.to_string(),
                expected: tissues.len(),
                found: counts.len(),
            });
        }

        report.count_rows += 1;
        if data.insert(gene.to_string(), counts) {
            report.overwritten_genes += 1;
            tracing::debug!("line {}: repeated count row for gene {}", line_no, gene);
        }
    }

    Ok((ExpressionMatrix::new(tissues, data), report))
}

fn strip_line_end(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
