//! Segment descriptors and the interpreter shared by every resource ID type.
//!
//! A resource ID schema is a straight-line grammar: an ordered list of
//! [`Segment`]s, each either a fixed literal or a value slot. Formatting walks
//! the list emitting `/`-joined segments; parsing walks the list and the input
//! in lock-step and fails at the first unmet expectation. There is no
//! backtracking and no alternative path.

use tracing::{debug, trace};

use crate::error::{IdError, SegmentFault};

/// One position in a resource ID schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A fixed token such as `subscriptions` or `Microsoft.AppConfiguration`,
    /// in its canonical casing.
    Literal(&'static str),

    /// A caller-supplied value.
    Value {
        /// Placeholder name used in templates, e.g. `subscriptionId`.
        name: &'static str,
        /// Human-readable name used in errors and descriptions.
        label: &'static str,
    },
}

impl Segment {
    /// Returns the name this segment is reported under in errors.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Segment::Literal(text) => text,
            Segment::Value { label, .. } => label,
        }
    }
}

/// How literal segments are compared against input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// Literals must match their canonical casing byte-for-byte.
    Exact,

    /// Literals match under ASCII case folding. Values are never folded.
    Insensitive,
}

impl Casing {
    fn matches(self, expected: &str, actual: &str) -> bool {
        match self {
            Casing::Exact => expected == actual,
            Casing::Insensitive => expected.eq_ignore_ascii_case(actual),
        }
    }
}

/// Returns the number of value slots in a schema.
#[must_use]
pub const fn value_count(segments: &[Segment]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < segments.len() {
        if matches!(segments[i], Segment::Value { .. }) {
            count += 1;
        }
        i += 1;
    }
    count
}

/// Renders `values` into the schema, in slot order.
///
/// Values are emitted verbatim. The caller is responsible for passing
/// non-empty values that contain no `/`.
#[must_use]
pub fn format<const N: usize>(segments: &[Segment], values: [&str; N]) -> String {
    debug_assert_eq!(value_count(segments), N);

    let mut values = values.into_iter();
    render(segments, |_| values.next().unwrap_or_default())
}

/// Renders the schema with every value slot shown as `{name}`.
#[must_use]
pub fn template(segments: &[Segment]) -> String {
    render(segments, |segment| match segment {
        Segment::Value { name, .. } => format!("{{{name}}}"),
        Segment::Literal(text) => (*text).to_string(),
    })
}

fn render<S, F>(segments: &[Segment], mut next_value: F) -> String
where
    S: AsRef<str>,
    F: FnMut(&Segment) -> S,
{
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Value { .. } => out.push_str(next_value(segment).as_ref()),
        }
    }
    out
}

/// Builds a one-line human-readable description, e.g.
/// `Configuration Store (Subscription ID: "sub1" / Resource Group: "rg1" / ...)`.
#[must_use]
pub fn describe<const N: usize>(
    display_name: &str,
    segments: &[Segment],
    values: [&str; N],
) -> String {
    let components: Vec<String> = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Value { label, .. } => Some(*label),
            Segment::Literal(_) => None,
        })
        .zip(values)
        .map(|(label, value)| format!("{}: {value:?}", title_case(label)))
        .collect();

    format!("{display_name} ({})", components.join(" / "))
}

fn title_case(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Parses `input` against the schema, returning the value segments in slot
/// order.
///
/// The input must be `/`-prefixed. Empty segments are preserved while
/// splitting so that `//` and trailing slashes are reported, never absorbed.
/// `N` must equal [`value_count`] of the schema.
pub fn parse<'a, const N: usize>(
    id_type: &'static str,
    segments: &[Segment],
    input: &'a str,
    casing: Casing,
) -> Result<[&'a str; N], IdError> {
    let schema = value_count(segments);
    if schema != N {
        return Err(IdError::malformed(
            id_type,
            input,
            SegmentFault::Arity {
                schema,
                requested: N,
            },
        ));
    }

    match interpret(segments, input, casing) {
        Ok(values) => {
            trace!(id_type, input, ?casing, "parsed resource ID");
            Ok(values)
        }
        Err(fault) => {
            debug!(id_type, input, ?casing, %fault, "rejected resource ID");
            Err(IdError::malformed(id_type, input, fault))
        }
    }
}

fn interpret<'a, const N: usize>(
    segments: &[Segment],
    input: &'a str,
    casing: Casing,
) -> Result<[&'a str; N], SegmentFault> {
    // An empty input has no root and no segments: it is missing the first one.
    let rest = match input.strip_prefix('/') {
        Some(rest) => Some(rest),
        None if input.is_empty() => None,
        None => return Err(SegmentFault::NotRooted),
    };
    let mut parts = rest.into_iter().flat_map(|rest| rest.split('/'));

    // Slot count matches the schema, checked by `parse`.
    let mut values = [""; N];
    let mut slots = values.iter_mut();

    for segment in segments {
        let part = parts.next();
        match (*segment, part) {
            (Segment::Literal(expected), None) => {
                return Err(SegmentFault::Missing { segment: expected });
            }
            (Segment::Literal(expected), Some("")) => {
                return Err(SegmentFault::Empty { segment: expected });
            }
            (Segment::Literal(expected), Some(actual)) => {
                if !casing.matches(expected, actual) {
                    return Err(SegmentFault::Mismatch {
                        expected,
                        actual: actual.to_string(),
                    });
                }
            }
            (Segment::Value { label, .. }, None) => {
                return Err(SegmentFault::Missing { segment: label });
            }
            (Segment::Value { label, .. }, Some("")) => {
                return Err(SegmentFault::Empty { segment: label });
            }
            (Segment::Value { .. }, Some(value)) => {
                if let Some(slot) = slots.next() {
                    *slot = value;
                }
            }
        }
    }

    let trailing: Vec<&str> = parts.collect();
    if !trailing.is_empty() {
        return Err(SegmentFault::Trailing {
            trailing: format!("/{}", trailing.join("/")),
        });
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGET: &[Segment] = &[
        Segment::Literal("shelves"),
        Segment::Value {
            name: "shelfName",
            label: "shelf name",
        },
        Segment::Literal("Acme.Widgets"),
        Segment::Value {
            name: "widgetName",
            label: "widget name",
        },
    ];

    fn parse_widget(input: &str, casing: Casing) -> Result<[&str; 2], IdError> {
        parse("WidgetId", WIDGET, input, casing)
    }

    #[test]
    fn test_value_count() {
        assert_eq!(value_count(WIDGET), 2);
        assert_eq!(value_count(&[]), 0);
        assert_eq!(value_count(&[Segment::Literal("only")]), 0);
    }

    #[test]
    fn test_format_joins_segments() {
        assert_eq!(
            format(WIDGET, ["top", "w-1"]),
            "/shelves/top/Acme.Widgets/w-1"
        );
    }

    #[test]
    fn test_format_emits_values_verbatim() {
        assert_eq!(
            format(WIDGET, ["Top Shelf", "W%201"]),
            "/shelves/Top Shelf/Acme.Widgets/W%201"
        );
    }

    #[test]
    fn test_template() {
        assert_eq!(
            template(WIDGET),
            "/shelves/{shelfName}/Acme.Widgets/{widgetName}"
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe("Widget", WIDGET, ["top", "w-1"]),
            r#"Widget (Shelf Name: "top" / Widget Name: "w-1")"#
        );
    }

    #[test]
    fn test_parse_exact() {
        let values = parse_widget("/shelves/top/Acme.Widgets/w-1", Casing::Exact).unwrap();
        assert_eq!(values, ["top", "w-1"]);
    }

    #[test]
    fn test_parse_exact_rejects_folded_literal() {
        let err = parse_widget("/shelves/top/acme.widgets/w-1", Casing::Exact).unwrap_err();
        assert_eq!(
            err.fault(),
            &SegmentFault::Mismatch {
                expected: "Acme.Widgets",
                actual: "acme.widgets".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_insensitive_folds_literals_only() {
        let values = parse_widget("/SHELVES/Top/aCmE.wIdGeTs/W-1", Casing::Insensitive).unwrap();
        assert_eq!(values, ["Top", "W-1"]);
    }

    #[test]
    fn test_parse_empty_input_is_missing_first_segment() {
        let err = parse_widget("", Casing::Exact).unwrap_err();
        assert_eq!(err.fault(), &SegmentFault::Missing { segment: "shelves" });
        assert_eq!(err.id_type(), "WidgetId");
        assert_eq!(err.input(), "");
    }

    #[test]
    fn test_parse_requires_root() {
        let err = parse_widget("shelves/top/Acme.Widgets/w-1", Casing::Exact).unwrap_err();
        assert_eq!(err.fault(), &SegmentFault::NotRooted);
    }

    #[test]
    fn test_parse_distinguishes_absent_and_empty_values() {
        let absent = parse_widget("/shelves", Casing::Exact).unwrap_err();
        assert_eq!(
            absent.fault(),
            &SegmentFault::Missing {
                segment: "shelf name"
            }
        );

        let empty = parse_widget("/shelves/", Casing::Exact).unwrap_err();
        assert_eq!(
            empty.fault(),
            &SegmentFault::Empty {
                segment: "shelf name"
            }
        );
    }

    #[test]
    fn test_parse_distinguishes_absent_and_empty_literals() {
        let absent = parse_widget("/shelves/top", Casing::Exact).unwrap_err();
        assert_eq!(
            absent.fault(),
            &SegmentFault::Missing {
                segment: "Acme.Widgets"
            }
        );

        let empty = parse_widget("/shelves/top/", Casing::Insensitive).unwrap_err();
        assert_eq!(
            empty.fault(),
            &SegmentFault::Empty {
                segment: "Acme.Widgets"
            }
        );

        let root_only = parse_widget("/", Casing::Exact).unwrap_err();
        assert_eq!(root_only.fault(), &SegmentFault::Empty { segment: "shelves" });
    }

    #[test]
    fn test_parse_rejects_more_slots_than_schema() {
        let result: Result<[&str; 3], _> =
            parse("WidgetId", WIDGET, "/shelves/top/Acme.Widgets/w-1", Casing::Exact);
        assert_eq!(
            result.unwrap_err().fault(),
            &SegmentFault::Arity {
                schema: 2,
                requested: 3
            }
        );
    }

    #[test]
    fn test_parse_rejects_fewer_slots_than_schema() {
        let result: Result<[&str; 1], _> =
            parse("WidgetId", WIDGET, "/shelves/top/Acme.Widgets/w-1", Casing::Insensitive);
        assert_eq!(
            result.unwrap_err().fault(),
            &SegmentFault::Arity {
                schema: 2,
                requested: 1
            }
        );

        let result: Result<[&str; 0], _> =
            parse("WidgetId", WIDGET, "/shelves/top/Acme.Widgets/w-1", Casing::Exact);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_doubled_slash() {
        let err = parse_widget("/shelves//Acme.Widgets/w-1", Casing::Exact).unwrap_err();
        assert!(err.is_empty_value());
    }

    #[test]
    fn test_parse_rejects_trailing_content() {
        let err = parse_widget("/shelves/top/Acme.Widgets/w-1/extra", Casing::Exact).unwrap_err();
        assert_eq!(
            err.fault(),
            &SegmentFault::Trailing {
                trailing: "/extra".to_string()
            }
        );

        let err = parse_widget("/shelves/top/Acme.Widgets/w-1/", Casing::Insensitive).unwrap_err();
        assert_eq!(
            err.fault(),
            &SegmentFault::Trailing {
                trailing: "/".to_string()
            }
        );
    }

    #[test]
    fn test_error_display_names_segment() {
        let err = parse_widget("/shelves/top/Acme.Widgets/", Casing::Exact).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"parsing WidgetId from "/shelves/top/Acme.Widgets/": missing value for widget name"#
        );
    }
}
