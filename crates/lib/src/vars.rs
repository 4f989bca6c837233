//! Named variable declarations for templated junction lines.
//!
//! Variables are declared in the config as `@:NAME=value1,value2,...` and
//! referenced from junction lines via [`crate::template`] placeholders.
//! Value order is significant: when several variables are declared, the
//! same position selects the aligned value from each of them during
//! expansion, which is why all declared variables must have the same
//! number of values. That invariant is checked lazily by [`VariableTable::validate`]
//! when a templated line is expanded, not at declaration time.

use thiserror::Error;

/// Errors raised while declaring or resolving variables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VarError {
  #[error("malformed variable declaration: {0}")]
  Malformed(String),

  #[error("undeclared variable: {0}")]
  Unknown(String),

  #[error("variable value counts differ: {0}")]
  LengthMismatch(String),
}

/// Declared variables of one config pass, in declaration order.
///
/// Declaring a name twice keeps both entries; lookups resolve to the
/// first. Callers must not rely on duplicate declarations.
#[derive(Debug, Default)]
pub struct VariableTable {
  entries: Vec<(String, Vec<String>)>,
}

impl VariableTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Parse and record one declaration, given the text after the `@:` marker.
  ///
  /// The declaration must contain exactly one `=` with a name on the left
  /// and a comma-separated value list on the right. Values are trimmed and
  /// empty segments dropped.
  pub fn declare(&mut self, decl: &str) -> Result<(), VarError> {
    let parts: Vec<&str> = decl.split('=').collect();
    if parts.len() != 2 {
      return Err(VarError::Malformed(decl.to_string()));
    }
    let name = parts[0].trim();
    if name.is_empty() {
      return Err(VarError::Malformed(decl.to_string()));
    }
    let values: Vec<String> = parts[1]
      .split(',')
      .map(str::trim)
      .filter(|v| !v.is_empty())
      .map(String::from)
      .collect();
    if values.is_empty() {
      return Err(VarError::Malformed(decl.to_string()));
    }
    self.entries.push((name.to_string(), values));
    Ok(())
  }

  /// Values of the first entry named `name`, in declared order.
  pub fn get(&self, name: &str) -> Result<&[String], VarError> {
    self
      .entries
      .iter()
      .find(|(n, _)| n == name)
      .map(|(_, values)| values.as_slice())
      .ok_or_else(|| VarError::Unknown(name.to_string()))
  }

  /// Check the cross-variable length invariant.
  ///
  /// With two or more entries, every entry's value count must equal the
  /// first entry's; the error names the first offending variable.
  pub fn validate(&self) -> Result<(), VarError> {
    let Some(((_, first), rest)) = self.entries.split_first() else {
      return Ok(());
    };
    for (name, values) in rest {
      if values.len() != first.len() {
        return Err(VarError::LengthMismatch(name.clone()));
      }
    }
    Ok(())
  }

  /// Number of recorded declarations (duplicates counted).
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
