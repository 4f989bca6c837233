//! Template expansion: from one templated junction line to concrete pairs.
//!
//! A junction line names a link path and a target path, either of which may
//! embed placeholders (see [`crate::template`]). Expansion enumerates the
//! driving variable's values and emits one fully substituted pair per
//! value, skipping values named in the driving placeholder's exclude list.
//!
//! The driving placeholder is the first one found, link side scanned before
//! target side. When several variables are referenced, all must have the
//! same number of values and the i-th pair combines the i-th value of each
//! of them. Only the driving placeholder's exclude list filters; other
//! occurrences substitute unfiltered at the same position.

use tracing::debug;

use crate::template::{Placeholder, find_placeholders};
use crate::vars::{VarError, VariableTable};

/// A fully substituted link/target pair, ready for the link store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcretePair {
  pub link: String,
  pub target: String,
}

/// Which side of a junction line a substitution lands on.
///
/// A value of the form `x|y` resolves per side: `x` for link-side
/// placeholders, `y` for target-side ones. A plain value is used verbatim
/// on both sides.
#[derive(Debug, Clone, Copy)]
enum Side {
  Link,
  Target,
}

/// Expand one junction line against the declared variables.
///
/// A line without placeholders passes through as the single unchanged
/// pair. Otherwise every referenced variable must be declared and the
/// table's length invariant must hold; on failure zero pairs are produced
/// and the error is returned for the caller to report.
///
/// Output preserves the driving variable's value order.
pub fn expand(link: &str, target: &str, vars: &VariableTable) -> Result<Vec<ConcretePair>, VarError> {
  let link_marks = find_placeholders(link);
  let target_marks = find_placeholders(target);

  let Some(driving) = link_marks.first().or_else(|| target_marks.first()) else {
    return Ok(vec![ConcretePair {
      link: link.to_string(),
      target: target.to_string(),
    }]);
  };

  for mark in link_marks.iter().chain(&target_marks) {
    vars.get(&mark.name)?;
  }
  vars.validate()?;

  let values = vars.get(&driving.name)?;

  let mut pairs = Vec::with_capacity(values.len());
  for (position, value) in values.iter().enumerate() {
    // Excludes match the raw declared value, before any `|` split.
    if driving.excludes.iter().any(|e| e == value) {
      continue;
    }
    let pair = ConcretePair {
      link: substitute(link, &link_marks, vars, position, Side::Link)?,
      target: substitute(target, &target_marks, vars, position, Side::Target)?,
    };
    debug!(link = %pair.link, target = %pair.target, "expanded pair");
    pairs.push(pair);
  }

  Ok(pairs)
}

/// Rebuild `text` with every placeholder replaced by its own variable's
/// value at `position`.
///
/// Spans come from the scanner, so the full placeholder text (including
/// any `:-exclude` suffix) is spliced out. The table was validated, so
/// `position` is in range for every referenced variable.
fn substitute(
  text: &str,
  marks: &[Placeholder],
  vars: &VariableTable,
  position: usize,
  side: Side,
) -> Result<String, VarError> {
  let mut out = String::with_capacity(text.len());
  let mut tail = 0;

  for mark in marks {
    let values = vars.get(&mark.name)?;
    out.push_str(&text[tail..mark.start]);
    out.push_str(side_value(&values[position], side));
    tail = mark.end;
  }
  out.push_str(&text[tail..]);

  Ok(out)
}

fn side_value(value: &str, side: Side) -> &str {
  match value.split_once('|') {
    Some((link_side, target_side)) => match side {
      Side::Link => link_side,
      Side::Target => target_side,
    },
    None => value,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn table(decls: &[&str]) -> VariableTable {
    let mut vars = VariableTable::new();
    for decl in decls {
      vars.declare(decl).unwrap();
    }
    vars
  }

  fn pair(link: &str, target: &str) -> ConcretePair {
    ConcretePair {
      link: link.to_string(),
      target: target.to_string(),
    }
  }

  #[test]
  fn plain_line_passes_through() {
    let vars = VariableTable::new();
    let pairs = expand(r"C:\links\app", r"D:\real\app", &vars).unwrap();
    assert_eq!(pairs, vec![pair(r"C:\links\app", r"D:\real\app")]);
  }

  #[test]
  fn one_variable_enumerates_all_values_in_order() {
    let vars = table(&["ENV=dev,prod"]);
    let pairs = expand(r"C:\link\{ENV}", r"D:\target\{ENV}", &vars).unwrap();
    assert_eq!(
      pairs,
      vec![
        pair(r"C:\link\dev", r"D:\target\dev"),
        pair(r"C:\link\prod", r"D:\target\prod"),
      ]
    );
  }

  #[test]
  fn exclude_removes_value_and_its_suffix_text() {
    let vars = table(&["ENV=dev,prod"]);
    let pairs = expand(r"C:\link\{ENV:-dev}", r"D:\target\{ENV}", &vars).unwrap();
    assert_eq!(pairs, vec![pair(r"C:\link\prod", r"D:\target\prod")]);
  }

  #[test]
  fn excluded_values_never_appear_in_output() {
    let vars = table(&["ENV=a,b,c,d"]);
    let pairs = expand(r"L\{ENV:-b,d}", r"T\{ENV}", &vars).unwrap();
    assert_eq!(pairs, vec![pair(r"L\a", r"T\a"), pair(r"L\c", r"T\c")]);
  }

  #[test]
  fn unmatched_exclude_tokens_are_ignored() {
    let vars = table(&["ENV=dev,prod"]);
    let pairs = expand(r"L\{ENV:-qa}", r"T\{ENV}", &vars).unwrap();
    assert_eq!(pairs.len(), 2);
  }

  #[test]
  fn two_variables_align_by_position() {
    let vars = table(&["APP=web,api", "DISK=d,e"]);
    let pairs = expand(r"C:\{APP}", r"{DISK}:\real\{APP}", &vars).unwrap();
    assert_eq!(
      pairs,
      vec![pair(r"C:\web", r"d:\real\web"), pair(r"C:\api", r"e:\real\api")]
    );
  }

  #[test]
  fn only_driving_placeholder_filters() {
    let vars = table(&["A=x,y", "B=q,r"]);
    let pairs = expand(r"{A:-x}_{B:-q}", r"T\{B}", &vars).unwrap();
    assert_eq!(pairs, vec![pair("y_r", r"T\r")]);
  }

  #[test]
  fn target_side_drives_when_link_is_plain() {
    let vars = table(&["ENV=dev,prod"]);
    let pairs = expand(r"C:\fixed", r"D:\{ENV:-dev}", &vars).unwrap();
    assert_eq!(pairs, vec![pair(r"C:\fixed", r"D:\prod")]);
  }

  #[test]
  fn unknown_variable_yields_zero_pairs() {
    let vars = table(&["ENV=dev"]);
    let err = expand(r"C:\{MISSING}", r"D:\{ENV}", &vars).unwrap_err();
    assert_eq!(err, VarError::Unknown("MISSING".to_string()));
  }

  #[test]
  fn length_mismatch_yields_zero_pairs() {
    let vars = table(&["A=one,two", "B=x"]);
    let err = expand(r"C:\{A}", r"D:\{A}", &vars).unwrap_err();
    assert_eq!(err, VarError::LengthMismatch("B".to_string()));
  }

  #[test]
  fn pipe_value_splits_by_side() {
    let vars = table(&["DIR=public|www,logs"]);
    let pairs = expand(r"C:\{DIR}", r"D:\srv\{DIR}", &vars).unwrap();
    assert_eq!(
      pairs,
      vec![pair(r"C:\public", r"D:\srv\www"), pair(r"C:\logs", r"D:\srv\logs")]
    );
  }

  #[test]
  fn pipe_value_survives_letterwise_excludes() {
    // Exclude tokens cannot contain `|`, so a pair value is never filtered.
    let vars = table(&["DIR=public|www,logs"]);
    let pairs = expand(r"C:\{DIR:-public}", r"D:\{DIR}", &vars).unwrap();
    assert_eq!(pairs.len(), 2);
  }

  #[test]
  fn repeated_occurrences_all_substitute() {
    let vars = table(&["ENV=dev"]);
    let pairs = expand(r"C:\{ENV}\{ENV}", r"D:\{ENV}", &vars).unwrap();
    assert_eq!(pairs, vec![pair(r"C:\dev\dev", r"D:\dev")]);
  }
}
