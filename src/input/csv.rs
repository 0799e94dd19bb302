use crate::input::InputError;

/// Header plus data rows of a small comma-separated file.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub rows: Vec<CsvRow>,
}

#[derive(Debug, Clone)]
pub struct CsvRow {
    pub line_no: usize,
    pub fields: Vec<String>,
}

impl CsvTable {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str, source: &str) -> Result<usize, InputError> {
        self.column(name).ok_or_else(|| InputError::MissingColumn {
            source_name: source.to_string(),
            column: name.to_string(),
        })
    }
}

impl CsvRow {
    pub fn get(&self, idx: usize) -> &str {
        self.fields.get(idx).map(String::as_str).unwrap_or("")
    }
}

/// Splits `text` into records. Quoted fields may hold delimiters, doubled
/// quotes and newlines; whitespace right after a delimiter is skipped.
pub fn parse_records(text: &str) -> Result<Vec<CsvRow>, InputError> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut line_no = 1usize;
    let mut record_line = 1usize;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line_no += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            ' ' | '\t' if at_field_start => {}
            '"' if at_field_start => {
                in_quotes = true;
                at_field_start = false;
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
                at_field_start = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                push_record(&mut records, std::mem::take(&mut fields), record_line);
                at_field_start = true;
                line_no += 1;
                record_line = line_no;
            }
            _ => {
                field.push(ch);
                at_field_start = false;
            }
        }
    }

    if in_quotes {
        return Err(InputError::Parse(format!(
            "unterminated quoted field starting on line {}",
            record_line
        )));
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        push_record(&mut records, fields, record_line);
    }
    Ok(records)
}

fn push_record(records: &mut Vec<CsvRow>, fields: Vec<String>, line_no: usize) {
    if fields.len() == 1 && fields[0].is_empty() {
        return;
    }
    records.push(CsvRow { line_no, fields });
}

pub fn parse_table(text: &str, source: &str) -> Result<CsvTable, InputError> {
    let mut records = parse_records(text)?.into_iter();
    let header = records
        .next()
        .ok_or_else(|| InputError::Parse(format!("{} is empty", source)))?
        .fields
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();
    Ok(CsvTable {
        header,
        rows: records.collect(),
    })
}

fn needs_quotes(field: &str) -> bool {
    field.contains([',', '"', '\r', '\n'])
}

/// One record with minimal quoting and a `\r\n` terminator.
pub fn format_record(fields: &[&str]) -> String {
    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if needs_quotes(field) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push_str("\r\n");
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/csv.rs"]
mod tests;
