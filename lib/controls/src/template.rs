//! Column aligned `field = value` templates and the emitter that fills them in per ROM

use crate::{descriptor::ControlDescriptor, error::GenerateError};
use ctrlmap_input::control_code_for_field;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Assignment operator
pub const OPERATOR: char = '=';

#[derive(Debug, Clone, PartialEq, Eq)]
/// An assignment line, split once when the template is parsed so values are never rescanned
pub struct Assignment {
    /// Text before the operator minus trailing whitespace, indentation included
    pub field: String,
    /// Character column of the operator
    pub operator_column: usize,
    /// Whitespace that followed the operator
    pub spacing: String,
    /// Default value, everything after the spacing
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Literal,
    Assignment(Assignment),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLine {
    /// Line content without its terminator
    pub text: String,
    /// `"\n"`, `"\r\n"` or nothing for an unterminated last line
    pub terminator: &'static str,
    pub kind: LineKind,
}

impl TemplateLine {
    fn parse(text: &str, terminator: &'static str) -> Self {
        Self {
            text: text.to_string(),
            terminator,
            kind: Assignment::parse(text).map_or(LineKind::Literal, LineKind::Assignment),
        }
    }
}

impl Assignment {
    fn parse(text: &str) -> Option<Self> {
        let content = text.trim_start();

        if content.starts_with(['#', ';', '[']) {
            return None;
        }

        let operator = text.find(OPERATOR)?;
        let field = text[..operator].trim_end();

        if field.trim_start().is_empty() {
            return None;
        }

        let after = &text[operator + OPERATOR.len_utf8()..];
        let value = after.trim_start();

        Some(Self {
            field: field.to_string(),
            operator_column: text[..operator].chars().count(),
            spacing: after[..after.len() - value.len()].to_string(),
            value: value.to_string(),
        })
    }

    /// Re-emit with a new value and the operator moved to `column`
    fn render(&self, column: usize, value: &str) -> String {
        let spacing = if self.spacing.is_empty() {
            " "
        } else {
            self.spacing.as_str()
        };

        let padding = column.saturating_sub(self.field.chars().count());

        format!(
            "{}{}{}{}{}",
            self.field,
            " ".repeat(padding),
            OPERATOR,
            spacing,
            value
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A parsed template, shared read only between every ROM it is rendered for
pub struct Template {
    lines: Vec<TemplateLine>,
    alignment_column: usize,
}

impl Template {
    /// Parse template text, every line is either an assignment or passed through as is
    pub fn parse(text: &str) -> Self {
        let lines: Vec<_> = text
            .split_inclusive('\n')
            .map(|line| {
                if let Some(line) = line.strip_suffix("\r\n") {
                    TemplateLine::parse(line, "\r\n")
                } else if let Some(line) = line.strip_suffix('\n') {
                    TemplateLine::parse(line, "\n")
                } else {
                    TemplateLine::parse(line, "")
                }
            })
            .collect();

        // Computed over every assignment, substituted or not
        let alignment_column = lines
            .iter()
            .filter_map(|line| match &line.kind {
                LineKind::Assignment(assignment) => Some(assignment.operator_column),
                LineKind::Literal => None,
            })
            .max()
            .unwrap_or_default();

        Self {
            lines,
            alignment_column,
        }
    }

    /// Read and parse a template file, failing here aborts generation
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GenerateError> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|source| GenerateError::Template {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::parse(&text))
    }

    pub fn lines(&self) -> &[TemplateLine] {
        &self.lines
    }

    /// Column every substituted operator is placed at
    pub fn alignment_column(&self) -> usize {
        self.alignment_column
    }

    /// Fill the template in for one ROM
    ///
    /// Assignments whose field names a control the descriptor has a label for get the label's
    /// action as their value, everything else comes out byte for byte as it went in
    pub fn render(&self, descriptor: &ControlDescriptor) -> String {
        let mut output = String::with_capacity(
            self.lines
                .iter()
                .map(|line| line.text.len() + line.terminator.len())
                .sum(),
        );

        for line in &self.lines {
            let substitution = match &line.kind {
                LineKind::Assignment(assignment) => control_code_for_field(&assignment.field)
                    .and_then(|code| descriptor.label_for(code))
                    .map(|label| assignment.render(self.alignment_column, &label.action)),
                LineKind::Literal => None,
            };

            match substitution {
                Some(rendered) => output.push_str(&rendered),
                None => output.push_str(&line.text),
            }
            output.push_str(line.terminator);
        }

        output
    }
}

/// Render `template` for `descriptor`
pub fn generate(descriptor: &ControlDescriptor, template: &Template) -> String {
    template.render(descriptor)
}

/// Location the config for `romname` is written to
pub fn output_path(output_directory: &Path, romname: &str, extension: &str) -> PathBuf {
    if extension.is_empty() {
        output_directory.join(romname)
    } else {
        output_directory.join(format!("{romname}.{extension}"))
    }
}

/// Render and write `<romname>.<extension>` into `output_directory`, creating it when needed
pub fn write_config(
    descriptor: &ControlDescriptor,
    template: &Template,
    output_directory: &Path,
    extension: &str,
) -> Result<PathBuf, GenerateError> {
    let path = output_path(output_directory, &descriptor.romname, extension);

    fs::create_dir_all(output_directory)
        .and_then(|_| fs::write(&path, generate(descriptor, template)))
        .map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;

    tracing::debug!("Wrote \"{}\"", path.display());

    Ok(path)
}
